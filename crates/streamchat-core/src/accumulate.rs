//! Folding raw content deltas into partial responses.

use async_stream::stream;
use futures_core::stream::Stream;
use futures_util::StreamExt;

use crate::error::Result;

/// Turn a delta stream into a stream of ever-growing partial responses.
///
/// Every present fragment is appended to a running buffer and a copy of the
/// buffer is yielded. Absent fragments are skipped without ending the
/// stream. The first error is forwarded and ends the stream; partial values
/// already yielded stay with the caller.
pub fn accumulate<'s, S>(deltas: S) -> impl Stream<Item = Result<String>> + Send + 's
where
    S: Stream<Item = Result<Option<String>>> + Send + 's,
{
    stream! {
        futures_util::pin_mut!(deltas);
        let mut partial = String::new();

        while let Some(delta) = deltas.next().await {
            match delta {
                Ok(Some(fragment)) => {
                    partial.push_str(&fragment);
                    yield Ok(partial.clone());
                }
                Ok(None) => {}
                Err(err) => {
                    yield Err(err);
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures_util::stream;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ChatError;

    fn deltas(fragments: &[Option<&str>]) -> Vec<Result<Option<String>>> {
        fragments
            .iter()
            .map(|fragment| Ok(fragment.map(str::to_owned)))
            .collect()
    }

    async fn collect_ok(items: Vec<Result<Option<String>>>) -> Vec<String> {
        accumulate(stream::iter(items))
            .map(|item| item.unwrap())
            .collect()
            .await
    }

    #[tokio::test]
    async fn test_hello_scenario() {
        let actual = collect_ok(deltas(&[Some("Hel"), Some("lo")])).await;
        let expected = vec!["Hel".to_string(), "Hello".to_string()];
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_yields_are_prefix_sums() {
        let fragments = ["The", " quick", " brown", " fox", "."];
        let items = fragments.iter().map(|f| Ok(Some(f.to_string()))).collect();

        let actual = collect_ok(items).await;

        let expected: Vec<String> = (1..=fragments.len())
            .map(|i| fragments[..i].concat())
            .collect();
        assert_eq!(actual, expected);
        assert_eq!(actual.last().unwrap(), &fragments.concat());
    }

    #[tokio::test]
    async fn test_absent_content_is_skipped_not_terminal() {
        let actual = collect_ok(deltas(&[None, Some("a"), None, None, Some("b"), None])).await;
        let expected = vec!["a".to_string(), "ab".to_string()];
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_empty_fragment_still_yields() {
        let actual = collect_ok(deltas(&[Some(""), Some("x"), Some("")])).await;
        let expected = vec!["".to_string(), "x".to_string(), "x".to_string()];
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_no_deltas_no_yields() {
        let actual = collect_ok(vec![]).await;
        assert_eq!(actual, Vec::<String>::new());
    }

    #[tokio::test]
    async fn test_error_ends_stream_after_earlier_yields() {
        let items = vec![
            Ok(Some("par".to_string())),
            Ok(Some("tial".to_string())),
            Err(ChatError::remote_api(None, "connection reset")),
            Ok(Some("never".to_string())),
        ];

        let actual: Vec<Result<String>> = accumulate(stream::iter(items)).collect().await;

        assert_eq!(actual.len(), 3);
        assert_eq!(actual[0].as_deref().unwrap(), "par");
        assert_eq!(actual[1].as_deref().unwrap(), "partial");
        assert!(matches!(actual[2], Err(ChatError::RemoteApi { status: None, .. })));
    }
}
