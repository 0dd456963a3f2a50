//! Tests for asset detection and reference shape predicates.

use urlutils::*;

fn parse(s: &str) -> UrlRef {
    UrlRef::parse(s).unwrap()
}

#[test]
fn test_is_asset_suffix_only() {
    assert!(is_asset("https://www.example.com/file.CSS"));
    assert!(!is_asset("https://www.example.io/assets/defaultcss"));
    assert!(!is_asset("https://www.example/file.jsz"));
    assert!(!is_asset("https://www.example.com/javascript-tutorial"));
}

#[test]
fn test_is_asset_every_extension() {
    for ext in ASSET_EXTENSIONS {
        let lower = format!("https://www.example.com/static/file{}", ext);
        let upper = lower.to_uppercase();
        assert!(is_asset(&lower), "Expected asset: {}", lower);
        assert!(is_asset(&upper), "Expected asset: {}", upper);
    }
}

#[test]
fn test_is_asset_on_parsed_reference() {
    let u = parse("//cdn.example.com/js/app.min.js");
    assert!(is_asset(&u.to_string()));

    let with_query = parse("//cdn.example.com/js/app.min.js?v=12");
    assert!(!is_asset(&with_query.to_string()));
    assert!(is_asset(&strip_query_fragment(with_query).to_string()));
}

#[test]
fn test_relative_and_absolute_are_not_complements() {
    let test_cases = vec![
        // (link, relative, absolute)
        ("http://www.example.com", false, true),
        ("http://www.example.com/some.html", false, true),
        ("//www.example.com", false, false),
        ("/news/29292-article.html", true, false),
        ("news/29292-article.html", true, false),
        ("?page=2", true, false),
    ];

    for (link, relative, absolute) in test_cases {
        let u = parse(link);
        assert_eq!(is_relative(&u), relative, "is_relative wrong for: {}", link);
        assert_eq!(is_absolute(&u), absolute, "is_absolute wrong for: {}", link);
    }
}

#[test]
fn test_is_home_page() {
    let test_cases = vec![
        ("http://www.example.io", false),
        ("http://www.example.io/", true),
        ("http://www.example.io#named_link", false),
        ("http://www.example.io/#named_link", false),
        ("http://www.example.io?some=parm", false),
        ("http://www.example.io/section/here", false),
        ("http://www.example.com/second/here/more?para=22", false),
        ("http://www.example.dance/here/now/params?query=22#fragment", false),
    ];

    for (link, expected) in test_cases {
        assert_eq!(is_home_page(&parse(link)), expected, "Expected {} for {}", expected, link);
    }
}

#[test]
fn test_is_empty_query() {
    let test_cases = vec![
        ("http://www.example.io", true),
        ("http://www.example.io/", true),
        ("http://www.example.io#named_link", false),
        ("http://www.example.io?some=parm", false),
        ("http://www.example.io/section/here", true),
        ("http://www.example.com/second/here/more?para=22", false),
        ("http://www.example.dance/here/now/params?query=22#fragment", false),
    ];

    for (link, expected) in test_cases {
        assert_eq!(is_empty_query(&parse(link)), expected, "Expected {} for {}", expected, link);
    }
}

#[test]
fn test_is_empty_path() {
    let test_cases = vec![
        ("http://www.example.io", true),
        ("http://www.example.io/", false),
        ("http://www.example.io#named_link", true),
        ("http://www.example.io?some=parm", true),
        ("http://www.example.io/section/here", false),
        ("http://www.example.com/second/here/more?para=22", false),
        ("http://www.example.dance/here/now/params?query=22#fragment", false),
    ];

    for (link, expected) in test_cases {
        assert_eq!(is_empty_path(&parse(link)), expected, "Expected {} for {}", expected, link);
    }
}

#[test]
fn test_is_plain() {
    let test_cases = vec![
        ("http://www.example.io", true),
        ("http://www.example.io/", false),
        ("http://www.example.io#named_link", false),
        ("http://www.example.io?some=parm", false),
        ("http://www.example.io/section/here", false),
        ("http://www.example.com/second/here/more?para=22", false),
        ("http://www.example.dance/here/now/params?query=22#fragment", false),
    ];

    for (link, expected) in test_cases {
        let u = parse(link);
        assert_eq!(is_plain(&u), expected, "Expected {} for {}", expected, link);
        assert_eq!(is_not_plain(&u), !expected, "Expected {} for {}", !expected, link);
    }
}
