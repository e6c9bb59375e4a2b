//! Whole-body tests for the parsing module.
//!
//! Each case feeds a complete document through [`render_body`] and compares
//! the exact HTML, including list indentation and blank-line separators.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{DEFAULT_TEMPLATE, convert, parsing::render_body};

/// Joins lines with `\n` and ends with a newline.
fn html(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn body(lines: &[&str]) -> String {
    render_body(&lines.join("\n"))
}

// Simple documents

#[rstest]
#[case::empty("", "\n")]
#[case::single_line("Lorem ipsum dolor sit amet.", "<p>Lorem ipsum dolor sit amet.</p>\n")]
#[case::two_paragraphs(
    "Paragraph One.\nParagraph Two.",
    "<p>Paragraph One.</p>\n<p>Paragraph Two.</p>\n"
)]
#[case::only_whitespace("   \n\n   ", "\n")]
#[case::only_newlines("\n\n\n", "\n")]
#[case::crlf("a\r\nb\r\n", "<p>a</p>\n<p>b</p>\n\n")]
fn simple_documents(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(render_body(markdown), expected);
}

// Headers and single lines

#[rstest]
#[case::h1("# Main Title", "<h1>Main Title</h1>\n")]
#[case::h2("## Subtitle", "<h2>Subtitle</h2>\n")]
#[case::h3("### Sub Subtitle", "<h3>Sub Subtitle</h3>\n")]
#[case::h4("#### Deep", "<h4>Deep</h4>\n")]
#[case::h5_is_paragraph("##### Too deep", "<p>##### Too deep</p>\n")]
#[case::no_space("#Title", "<p>#Title</p>\n")]
#[case::header_with_code("# Title with `code`", "<h1>Title with <code>code</code></h1>\n")]
#[case::header_with_link(
    "## See [docs](https://example.com)",
    "<h2>See <a href=\"https://example.com\">docs</a></h2>\n"
)]
#[case::whole_line_code("`code`", "<p><code>code</code></p>\n")]
#[case::several_code_spans(
    "Call function `foo()` and `bar()`",
    "<p>Call function <code>foo()</code> and <code>bar()</code></p>\n"
)]
#[case::code_special_chars("Use `<tag>`", "<p>Use <code>&lt;tag&gt;</code></p>\n")]
#[case::link("[GitHub](https://github.com)", "<p><a href=\"https://github.com\">GitHub</a></p>\n")]
#[case::autolink_https(
    "Visit https://example.com to get started",
    "<p>Visit <a href=\"https://example.com\">https://example.com</a> to get started</p>\n"
)]
#[case::autolink_http(
    "Go to http://example.com",
    "<p>Go to <a href=\"http://example.com\">http://example.com</a></p>\n"
)]
#[case::multiple_links(
    "[Google](https://google.com) and [Bing](https://bing.com)",
    "<p><a href=\"https://google.com\">Google</a> and <a href=\"https://bing.com\">Bing</a></p>\n"
)]
#[case::url_query(
    "[Docs](https://example.com/docs?id=123&format=html)",
    "<p><a href=\"https://example.com/docs?id=123&amp;format=html\">Docs</a></p>\n"
)]
#[case::ampersand("Tom & Jerry", "<p>Tom &amp; Jerry</p>\n")]
#[case::quotes("Say \"hello\", it's great", "<p>Say &quot;hello&quot;, it&#39;s great</p>\n")]
#[case::script(
    "<script>alert(\"test & run\")</script>",
    "<p>&lt;script&gt;alert(&quot;test &amp; run&quot;)&lt;/script&gt;</p>\n"
)]
#[case::paragraph_is_trimmed("   indented text  ", "<p>indented text</p>\n")]
fn single_lines(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(render_body(markdown), expected);
}

#[test]
fn header_renders_exactly_once() {
    let out = render_body("# Title");
    assert_eq!(invariants::count(&out, "<h1>Title</h1>"), 1);
}

// Lists

#[test]
fn single_item_list() {
    assert_eq!(
        body(&["- Item 1"]),
        html(&["<ul>", "    <li>Item 1</li>", "</ul>"])
    );
}

#[test]
fn nested_list_items() {
    assert_eq!(
        body(&["- First", "  - First Child", "  - Second Child", "- Second"]),
        html(&[
            "<ul>",
            "    <li>First",
            "        <ul>",
            "            <li>First Child</li>",
            "            <li>Second Child</li>",
            "        </ul>",
            "    </li>",
            "    <li>Second</li>",
            "</ul>",
        ])
    );
}

#[test]
fn irregular_indentation_nests_by_comparison() {
    assert_eq!(
        body(&[
            "   - First level",
            "       - Second level",
            "       - Third level",
            "                 - Third level",
        ]),
        html(&[
            "<ul>",
            "    <li>First level",
            "        <ul>",
            "            <li>Second level</li>",
            "            <li>Third level",
            "                <ul>",
            "                    <li>Third level</li>",
            "                </ul>",
            "            </li>",
            "        </ul>",
            "    </li>",
            "</ul>",
        ])
    );
}

#[test]
fn tabs_count_as_four_columns() {
    assert_eq!(
        body(&["- a", "\t- b"]),
        html(&[
            "<ul>",
            "    <li>a",
            "        <ul>",
            "            <li>b</li>",
            "        </ul>",
            "    </li>",
            "</ul>",
        ])
    );
}

#[test]
fn list_items_render_inline_spans() {
    assert_eq!(
        body(&["- Run `npm install`", "- Visit [GitHub](https://github.com)"]),
        html(&[
            "<ul>",
            "    <li>Run <code>npm install</code></li>",
            "    <li>Visit <a href=\"https://github.com\">GitHub</a></li>",
            "</ul>",
        ])
    );
}

#[test]
fn ordered_list_ignores_numbers() {
    assert_eq!(
        body(&["3. Originally nr 3", "6. Originally nr 6", "7. Originally nr 7"]),
        html(&[
            "<ol>",
            "    <li>Originally nr 3</li>",
            "    <li>Originally nr 6</li>",
            "    <li>Originally nr 7</li>",
            "</ol>",
        ])
    );
}

#[test]
fn ordered_list_with_unordered_children() {
    assert_eq!(
        body(&["1. Ordered", "2. Ordered Two", "   - Point Subitem 2.1"]),
        html(&[
            "<ol>",
            "    <li>Ordered</li>",
            "    <li>Ordered Two",
            "        <ul>",
            "            <li>Point Subitem 2.1</li>",
            "        </ul>",
            "    </li>",
            "</ol>",
        ])
    );
}

#[test]
fn unordered_list_with_ordered_children() {
    assert_eq!(
        body(&["- Main", "   1. Ordered One", "   2. Ordered Two", "- Another Main"]),
        html(&[
            "<ul>",
            "    <li>Main",
            "        <ol>",
            "            <li>Ordered One</li>",
            "            <li>Ordered Two</li>",
            "        </ol>",
            "    </li>",
            "    <li>Another Main</li>",
            "</ul>",
        ])
    );
}

#[test]
fn nesting_order_is_exact() {
    let compact: String = render_body("- A\n  - B\n- C")
        .lines()
        .map(str::trim)
        .collect();
    assert_eq!(compact, "<ul><li>A<ul><li>B</li></ul></li><li>C</li></ul>");
}

#[test]
fn depth_sequence_balances_tags() {
    let src = [0, 2, 2, 4, 2, 0]
        .iter()
        .enumerate()
        .map(|(i, depth)| format!("{}- item {i}", " ".repeat(*depth)))
        .collect::<Vec<_>>()
        .join("\n");
    let out = render_body(&src);

    assert_eq!(invariants::count(&out, "<ul>"), 3);
    assert_eq!(invariants::count(&out, "<ul>"), invariants::count(&out, "</ul>"));
    assert_eq!(invariants::count(&out, "<li>"), 6);
    assert_eq!(invariants::count(&out, "<li>"), invariants::count(&out, "</li>"));
    invariants::check_balanced(&out);
}

#[test]
fn blank_lines_inside_list_do_not_split_it() {
    assert_eq!(
        body(&["- a", "", "", "- b"]),
        html(&["<ul>", "    <li>a</li>", "    <li>b</li>", "</ul>"])
    );
}

#[test]
fn paragraph_ends_list() {
    assert_eq!(
        body(&["- a", "text", "- b"]),
        html(&[
            "<ul>",
            "    <li>a</li>",
            "</ul>",
            "<p>text</p>",
            "<ul>",
            "    <li>b</li>",
            "</ul>",
        ])
    );
}

#[test]
fn marker_without_text_is_paragraph() {
    assert_eq!(render_body("-"), "<p>-</p>\n");
}

// Code blocks

#[test]
fn simple_code_block() {
    assert_eq!(
        body(&["```", "code here", "```"]),
        html(&[
            "<section class=\"code\">",
            "<pre><code>code here</code></pre>",
            "</section>",
        ])
    );
}

#[test]
fn code_block_keeps_lines_and_escapes() {
    assert_eq!(
        body(&["```", "func main() {", "    fmt.Println(\"Hello\")", "}", "```"]),
        html(&[
            "<section class=\"code\">",
            "<pre><code>func main() {",
            "    fmt.Println(&quot;Hello&quot;)",
            "}</code></pre>",
            "</section>",
        ])
    );
}

#[test]
fn code_block_markup_is_not_rendered() {
    assert_eq!(
        body(&["```", "<div>`x` [a](b) https://c</div>", "```"]),
        html(&[
            "<section class=\"code\">",
            "<pre><code>&lt;div&gt;`x` [a](b) https://c&lt;/div&gt;</code></pre>",
            "</section>",
        ])
    );
}

#[test]
fn consecutive_code_blocks() {
    assert_eq!(
        body(&["```", "first", "```", "", "```", "second", "```"]),
        html(&[
            "<section class=\"code\">",
            "<pre><code>first</code></pre>",
            "</section>",
            "",
            "<section class=\"code\">",
            "<pre><code>second</code></pre>",
            "</section>",
        ])
    );
}

#[test]
fn unclosed_code_block_is_closed_at_end() {
    assert_eq!(
        body(&["```", "const x = 5", "/* without closing fence */"]),
        html(&[
            "<section class=\"code\">",
            "<pre><code>const x = 5",
            "/* without closing fence */</code></pre>",
            "</section>",
        ])
    );
}

#[test]
fn empty_code_block() {
    assert_eq!(
        render_body("```\n```"),
        "<section class=\"code\">\n<pre><code></code></pre>\n</section>\n"
    );
}

#[test]
fn code_inside_list_item_is_stripped_to_fence_depth() {
    assert_eq!(
        body(&[
            "- Install:",
            "    ```",
            "    npm install",
            "      --save-dev",
            "    ```",
            "- Done",
        ]),
        html(&[
            "<ul>",
            "    <li>Install:",
            "<section class=\"code\">",
            "<pre><code>npm install",
            "  --save-dev</code></pre>",
            "</section>",
            "    </li>",
            "    <li>Done</li>",
            "</ul>",
        ])
    );
}

#[test]
fn code_inside_list_after_blank_line() {
    let out = body(&["- step", "", "  ```", "  x", "  ```", "- next"]);
    assert!(out.starts_with("<ul>\n    <li>step\n<section class=\"code\">"));
    assert!(out.ends_with("    <li>next</li>\n</ul>\n"));
    invariants::check_balanced(&out);
}

// Malformed input

#[rstest]
#[case::empty_link("[link without URL]()")]
#[case::stacked_fences("```\n```\nnested\n```\n```")]
#[case::long_line(&"a".repeat(10_000))]
#[case::unclosed_code_span("`never closed")]
#[case::dangling_nested_list("- a\n        - b\n    - c\n  - d")]
#[case::shallower_than_root("    - a\n- b\n  - c")]
#[case::fence_in_unterminated_list("- a\n  ```\n  code")]
fn malformed_input_still_balances(#[case] markdown: &str) {
    invariants::check_balanced(&render_body(markdown));
}

#[test]
fn shallower_than_root_joins_root_level() {
    assert_eq!(
        body(&["  - a", "- b"]),
        html(&["<ul>", "    <li>a</li>", "    <li>b</li>", "</ul>"])
    );
}

// Whole documents

#[test]
fn complex_document() {
    let markdown = concat!(
        "# Main Title\n",
        "\n",
        "This is an introduction with a [link](https://example.com) and some `inline code`.\n",
        "\n",
        "## Section 1\n",
        "\n",
        "Some text with `npm install` command.\n",
        "\n",
        "- Install dependencies\n",
        "- Run tests\n",
        "- Deploy\n",
        "\n",
        "## Section 2\n",
        "\n",
        "### Nested subsection\n",
        "\n",
        "#### Level four - Nested subsection\n",
        "\n",
        "1. First step\n",
        "2. Second step with `code`\n",
        "\n",
        "```\n",
        "func main() {\n",
        "    fmt.Println(\"Hello\")\n",
        "}\n",
        "```\n",
        "\n",
        "Visit https://github.com for more info.",
    );

    let result = render_body(markdown);

    for expected in [
        "<h1>Main Title</h1>",
        "<p>This is an introduction with a <a href=\"https://example.com\">link</a> and some <code>inline code</code>.</p>",
        "<h2>Section 1</h2>",
        "<p>Some text with <code>npm install</code> command.</p>",
        "<ul>\n    <li>Install dependencies</li>\n    <li>Run tests</li>\n    <li>Deploy</li>\n</ul>",
        "<h2>Section 2</h2>",
        "<h3>Nested subsection</h3>",
        "<h4>Level four - Nested subsection</h4>",
        "<ol>\n    <li>First step</li>\n    <li>Second step with <code>code</code></li>\n</ol>",
        "<section class=\"code\">\n<pre><code>func main() {\n    fmt.Println(&quot;Hello&quot;)\n}</code></pre>\n</section>",
        "<p>Visit <a href=\"https://github.com\">https://github.com</a> for more info.</p>",
    ] {
        assert!(result.contains(expected), "missing {expected:?} in:\n{result}");
    }
    invariants::check_balanced(&result);
}

#[test]
fn document_escapes_body_once() {
    let out = convert("X & Y", DEFAULT_TEMPLATE, "T").unwrap();
    assert_eq!(invariants::count(&out, "<p>X &amp; Y</p>"), 1);
}
