//! Generation settings supplied fresh with every call.
//!
//! The bounds below mirror the settings controls of the chat surface. They
//! are only enforced by [`GenerationParameters::validate`], which the surface
//! calls before accepting a new value; backends pass whatever they receive
//! through unchanged.
use std::ops::RangeInclusive;

use crate::{
    error::{ChatError, Result},
    model::Model,
};

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const TEMPERATURE_STEP: f64 = 0.05;
pub const DEFAULT_TEMPERATURE: f64 = 0.6;

pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 0..=4096;
pub const MAX_TOKENS_STEP: u32 = 64;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParameters {
    pub temperature: f64,
    pub max_tokens: u32,
    pub model: Model,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            model: Model::default(),
        }
    }
}

impl GenerationParameters {
    pub fn new(temperature: f64, max_tokens: u32, model: Model) -> Self {
        Self {
            temperature,
            max_tokens,
            model,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Check the values against the settings bounds. Out-of-range values are
    /// rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(ChatError::configuration(format!(
                "temperature {} outside {}..={}",
                self.temperature,
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end()
            )));
        }
        if !MAX_TOKENS_RANGE.contains(&self.max_tokens) {
            return Err(ChatError::configuration(format!(
                "max tokens {} outside {}..={}",
                self.max_tokens,
                MAX_TOKENS_RANGE.start(),
                MAX_TOKENS_RANGE.end()
            )));
        }
        Ok(())
    }
}
