use super::*;
use serde_json::json;

#[test]
fn decodes_ampersand_globally() {
    assert_eq!(decode_entities("Johnson &amp; Johnson"), "Johnson & Johnson");
    assert_eq!(decode_entities("a &amp; b &amp; c"), "a & b & c");
}

#[test]
fn decodes_comparison_signs() {
    assert_eq!(
        decode_entities("Price: &lt; $100 &amp; &gt; $50"),
        "Price: < $100 & > $50"
    );
}

#[test]
fn decodes_quotes_and_apostrophes() {
    assert_eq!(
        decode_entities("&quot;Hello world&quot; &amp; it&#39;s great!"),
        "\"Hello world\" & it's great!"
    );
    assert_eq!(decode_entities("We&apos;re hiring"), "We're hiring");
}

#[test]
fn decodes_currency_and_marks() {
    assert_eq!(
        decode_entities("Price: 100&euro; &copy; MyCompany&trade;"),
        "Price: 100€ © MyCompany™"
    );
    assert_eq!(decode_entities("&pound;&yen;&cent;&reg;"), "£¥¢®");
    assert_eq!(decode_entities("&sect;1 &para;2"), "§1 ¶2");
}

#[test]
fn decodes_typographic_punctuation() {
    assert_eq!(
        decode_entities("&ldquo;a&rdquo; &lsquo;b&rsquo; &laquo;c&raquo;"),
        "\u{201C}a\u{201D} \u{2018}b\u{2019} «c»"
    );
    assert_eq!(decode_entities("1&ndash;2&mdash;3&hellip;&bull;"), "1–2—3…•");
}

#[test]
fn nbsp_becomes_plain_space() {
    assert_eq!(decode_entities("Full&nbsp;time"), "Full time");
}

#[test]
fn decodes_numeric_references() {
    assert_eq!(decode_entities("Symbol: &#64; &#x40; &#38;"), "Symbol: @ @ &");
    assert_eq!(decode_entities("&#X41;&#x1F3AC;"), "A\u{1F3AC}");
    assert_eq!(decode_entities("caf&#233;"), "café");
}

#[test]
fn named_pass_runs_before_numeric_passes() {
    assert_eq!(decode_entities("&amp;#64;"), "@");
    assert_eq!(decode_entities("&lt;b&gt; &#x26; &#38;"), "<b> & &");
}

#[test]
fn unknown_and_malformed_entities_pass_through() {
    assert_eq!(decode_entities("&foo; &amp"), "&foo; &amp");
    assert_eq!(decode_entities("&#; &#x; &#xZZ;"), "&#; &#x; &#xZZ;");
    assert_eq!(decode_entities("&#55296;"), "&#55296;");
    assert_eq!(decode_entities("&#x110000;"), "&#x110000;");
    assert_eq!(decode_entities("&#99999999999999999999;"), "&#99999999999999999999;");
    assert_eq!(decode_entities("&#0;"), "&#0;");
}

#[test]
fn text_without_entities_is_untouched() {
    assert_eq!(decode_entities(""), "");
    assert_eq!(decode_entities("plain & simple"), "plain & simple");
    assert_eq!(decode_entities("Remote 🌍"), "Remote 🌍");
}

#[test]
fn decoding_twice_matches_decoding_once() {
    let inputs = [
        "Tom &amp; Jerry &lt;3 &hellip; &#169;",
        "&quot;Office Assistant &amp; Admin&quot;",
        "$50k &euro; &ndash; &#x24;80k",
    ];
    for input in inputs {
        let once = decode_entities(input);
        assert_eq!(decode_entities(&once), once, "input: {input}");
    }
}

#[test]
fn absent_text_decodes_to_empty() {
    assert_eq!(decode_entities_opt(None), "");
    assert_eq!(decode_entities_opt(Some("&gt;")), ">");
}

#[test]
fn deep_decode_walks_objects_and_arrays() {
    let input = json!({"a": "&amp;", "b": ["&lt;", {"c": "&gt;"}]});
    let decoded = decode_entities_in_value(&input);
    assert_eq!(decoded, json!({"a": "&", "b": ["<", {"c": ">"}]}));
    assert_eq!(input, json!({"a": "&amp;", "b": ["&lt;", {"c": "&gt;"}]}));
}

#[test]
fn deep_decode_keeps_non_string_leaves_and_keys() {
    let input = json!({
        "Id": 711,
        "remote": true,
        "bonus": null,
        "&amp;key": "R&amp;D",
        "scores": [1.5, "&#56;"]
    });
    let decoded = decode_entities_in_value(&input);
    assert_eq!(
        decoded,
        json!({
            "Id": 711,
            "remote": true,
            "bonus": null,
            "&amp;key": "R&D",
            "scores": [1.5, "8"]
        })
    );
}

#[test]
fn deep_decode_handles_job_payload() {
    let job = json!({
        "Title": "Software Engineer &amp; Developer",
        "company": "Tech Corp &lt;Premium&gt;",
        "salary": "$50k - $80k &euro;",
        "jobType": "Full-time &trade;",
        "requirements": [
            "JavaScript &amp; TypeScript experience",
            "3+ years of experience in &quot;web development&quot;"
        ]
    });
    let decoded = decode_entities_in_value(&job);
    assert_eq!(decoded["Title"], "Software Engineer & Developer");
    assert_eq!(decoded["company"], "Tech Corp <Premium>");
    assert_eq!(decoded["salary"], "$50k - $80k €");
    assert_eq!(decoded["jobType"], "Full-time ™");
    assert_eq!(
        decoded["requirements"][1],
        "3+ years of experience in \"web development\""
    );
}

#[test]
fn table_has_unique_entries() {
    let mut names: Vec<&str> = NAMED_ENTITIES.iter().map(|(e, _)| *e).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), NAMED_ENTITIES.len());
    assert_eq!(NAMED_ENTITIES[0].0, "&amp;");
}

#[test]
fn double_escaped_entities_resolve_in_one_pass_except_amp() {
    assert_eq!(decode_entities("&amp;lt;b&amp;gt;"), "<b>");
    assert_eq!(decode_entities("&amp;#64;"), "@");
    let once = decode_entities("&amp;amp;");
    assert_eq!(once, "&amp;");
    assert_eq!(decode_entities(&once), "&");
}
