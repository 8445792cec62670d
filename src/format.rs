use crate::models::SearchResponse;

pub const NO_RESULTS: &str = "未找到相关结果";

/// Renders a response as the human-readable report printed to stdout.
///
/// Results are listed in the order the service returned them. The
/// relevance line only appears for items that carry a score.
pub fn format_results(response: Option<&SearchResponse>) -> String {
    let results = match response {
        Some(response) if !response.results.is_empty() => &response.results,
        _ => return NO_RESULTS.to_string(),
    };

    let mut output = format!("找到 {} 个结果：\n\n", results.len());

    for (i, item) in results.iter().enumerate() {
        output.push_str(&format!("### {}. {}\n", i + 1, item.title));
        output.push_str(&format!("**链接**: {}\n", item.url));
        output.push_str(&format!("**摘要**: {}\n", item.content));
        if let Some(score) = item.score {
            output.push_str(&format!("**相关性**: {:.1}%\n", score * 100.0));
        }
        output.push('\n');
    }

    output
}

pub fn format_json(response: &SearchResponse) -> serde_json::Result<String> {
    serde_json::to_string_pretty(response)
}

/// Lines printed before the request goes out.
pub fn format_preamble(query: &str, max_results: i64) -> String {
    format!("搜索: {}\n最大结果数: {}\n", query, max_results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultItem;

    fn item(title: &str, score: Option<f64>) -> ResultItem {
        ResultItem {
            title: title.to_string(),
            url: format!("http://{}", title.to_lowercase()),
            content: format!("about {}", title),
            score,
        }
    }

    #[test]
    fn absent_or_empty_response_is_no_results() {
        assert_eq!(format_results(None), NO_RESULTS);
        assert_eq!(format_results(Some(&SearchResponse::default())), NO_RESULTS);
    }

    #[test]
    fn numbers_blocks_in_input_order() {
        let response = SearchResponse {
            results: vec![item("Zeta", None), item("Alpha", None), item("Mu", None)],
        };

        let output = format_results(Some(&response));
        assert!(output.starts_with("找到 3 个结果：\n\n"));
        assert_eq!(output.matches("### ").count(), 3);

        let zeta = output.find("### 1. Zeta").unwrap();
        let alpha = output.find("### 2. Alpha").unwrap();
        let mu = output.find("### 3. Mu").unwrap();
        assert!(zeta < alpha && alpha < mu);
    }

    #[test]
    fn score_renders_as_percentage() {
        let response = SearchResponse {
            results: vec![item("A", Some(0.873))],
        };
        let output = format_results(Some(&response));
        assert!(output.contains("**相关性**: 87.3%\n"));
    }

    #[test]
    fn missing_score_omits_relevance_line() {
        let response = SearchResponse {
            results: vec![item("A", None)],
        };
        let output = format_results(Some(&response));
        assert!(!output.contains("相关性"));
    }

    #[test]
    fn zero_score_is_still_shown() {
        let response = SearchResponse {
            results: vec![item("A", Some(0.0))],
        };
        assert!(format_results(Some(&response)).contains("**相关性**: 0.0%"));
    }

    #[test]
    fn full_block_layout() {
        let response = SearchResponse {
            results: vec![
                ResultItem {
                    title: "A".to_string(),
                    url: "http://a".to_string(),
                    content: "c1".to_string(),
                    score: Some(0.9),
                },
                ResultItem {
                    title: "B".to_string(),
                    url: "http://b".to_string(),
                    content: "c2".to_string(),
                    score: None,
                },
            ],
        };

        let expected = "找到 2 个结果：\n\n\
                        ### 1. A\n**链接**: http://a\n**摘要**: c1\n**相关性**: 90.0%\n\n\
                        ### 2. B\n**链接**: http://b\n**摘要**: c2\n\n";
        assert_eq!(format_results(Some(&response)), expected);
    }

    #[test]
    fn preamble_lists_query_and_limit() {
        assert_eq!(
            format_preamble("OpenClaw AI", 2),
            "搜索: OpenClaw AI\n最大结果数: 2\n"
        );
    }

    #[test]
    fn json_output_round_trips_results() {
        let response = SearchResponse {
            results: vec![item("A", Some(0.5)), item("B", None)],
        };
        let rendered = format_json(&response).unwrap();
        let parsed: SearchResponse = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, response);
        assert!(!rendered.contains("\"score\": null"));
    }
}
