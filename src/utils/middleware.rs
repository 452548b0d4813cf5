use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .filter_map(|o| {
            let trimmed = o.trim();
            if trimmed.is_empty() {
                None
            } else {
                HeaderValue::from_str(trimmed).ok()
            }
        })
        .collect()
}

pub fn cors_layer() -> CorsLayer {
    let from_env = parse_origins(&std::env::var("ALLOWED_ORIGINS").unwrap_or_default());

    let origins = if from_env.is_empty() {
        // local dashboard dev server
        vec![
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ]
    } else {
        from_env
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("http://a.example, http://b.example ,");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], HeaderValue::from_static("http://a.example"));
        assert_eq!(origins[1], HeaderValue::from_static("http://b.example"));
    }

    #[test]
    fn parse_origins_empty_input() {
        assert!(parse_origins("").is_empty());
    }
}
