use urlencoding::encode;

/// Build a query string from key-value pairs. Pairs with an empty value are
/// skipped.
pub fn build_query_string(pairs: &[(&str, &str)]) -> String {
    let mut first = true;
    let mut out = String::new();
    for (k, v) in pairs {
        if v.is_empty() {
            continue;
        }
        if !first {
            out.push('&');
        } else {
            first = false;
        }
        out.push_str(&encode(k));
        out.push('=');
        out.push_str(&encode(v));
    }
    out
}

/// Append a query string to a path, omitting the `?` when there is nothing to add.
pub fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    let query = build_query_string(pairs);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
