//! Tests for prompt parsing and resolution.

use super::document::split_frontmatter;
use super::*;
use crate::error::PrunError;
use crate::requirements::Host;
use crate::test_support::{FakeHost, write_file};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const STRUCTURED_PROMPT: &str = r#"name: review
description: Review a file
model: sonnet
requirements:
  commands: [git]
  environment: [GITHUB_TOKEN]
messages:
  - role: system
    content: You are a careful reviewer.
  - role: user
    content: Review {{file}} on branch {{branch}}.
"#;

const TEXT_PROMPT: &str = r#"---
name: summarize
description: Summarize a topic
requirements:
  tools: [Read]
  directories: [docs]
---
Summarize {{topic}} in three bullet points.
"#;

fn text_doc(content: &str) -> RawDocument {
    RawDocument {
        format: DocumentFormat::TextWithFrontmatter,
        path: PathBuf::from("test.md"),
        content: content.to_string(),
    }
}

fn yaml_doc(content: &str) -> RawDocument {
    RawDocument {
        format: DocumentFormat::StructuredYaml,
        path: PathBuf::from("test.prompt.yaml"),
        content: content.to_string(),
    }
}

fn names(list: &[&str]) -> std::collections::BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// =========================================================================
// Format detection
// =========================================================================

#[test]
fn test_format_from_extension() {
    let cases = [
        ("a.prompt.yaml", DocumentFormat::StructuredYaml),
        ("a.yaml", DocumentFormat::StructuredYaml),
        ("A.YML", DocumentFormat::StructuredYaml),
        ("a.md", DocumentFormat::TextWithFrontmatter),
        ("dir/a.txt", DocumentFormat::TextWithFrontmatter),
    ];
    for (name, expected) in cases {
        assert_eq!(DocumentFormat::from_path(Path::new(name)).unwrap(), expected, "{}", name);
    }
}

#[test]
fn test_unknown_extension_is_unsupported() {
    for name in ["a.json", "a", "notes.rst"] {
        let err = DocumentFormat::from_path(Path::new(name)).unwrap_err();
        assert!(matches!(err, PrunError::UnsupportedFormat(_)), "{}", name);
    }
}

// =========================================================================
// Structured documents
// =========================================================================

#[test]
fn test_parse_structured_prompt() {
    let prompt = yaml_doc(STRUCTURED_PROMPT).parse().unwrap();

    assert_eq!(prompt.name.as_deref(), Some("review"));
    assert_eq!(prompt.description.as_deref(), Some("Review a file"));
    assert_eq!(prompt.model.as_deref(), Some("sonnet"));

    let requirements = prompt.requirements.as_ref().unwrap();
    assert_eq!(requirements.commands, vec!["git".to_string()]);
    assert_eq!(requirements.environment, vec!["GITHUB_TOKEN".to_string()]);
    assert_eq!(requirements.tools, None);

    match &prompt.body {
        Body::Messages(messages) => {
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0].role, "system");
            assert_eq!(messages[1].role, "user");
        }
        other => panic!("expected messages, got {:?}", other),
    }
    assert_eq!(prompt.required_variables(), names(&["branch", "file"]));
    assert!(prompt.warnings.is_empty());
}

#[test]
fn test_structured_render_and_flatten() {
    let prompt = yaml_doc(STRUCTURED_PROMPT).parse().unwrap();
    let vars: HashMap<String, String> = [("file", "main.rs"), ("branch", "dev")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let rendered = prompt.body.render(&vars);
    assert_eq!(
        rendered.to_text(),
        "You are a careful reviewer.\n\nReview main.rs on branch dev."
    );
}

#[test]
fn test_structured_without_messages() {
    let prompt = yaml_doc("name: empty\n").parse().unwrap();
    assert_eq!(prompt.body, Body::Messages(Vec::new()));
    assert_eq!(prompt.body.to_text(), "");
}

#[test]
fn test_structured_message_content_may_be_nested() {
    let prompt = yaml_doc(
        "messages:\n  - role: user\n    content:\n      - First {{a}}\n      - Second {{b}}\n",
    )
    .parse()
    .unwrap();
    assert_eq!(prompt.required_variables(), names(&["a", "b"]));
    assert_eq!(prompt.body.to_text(), "First {{a}}\nSecond {{b}}");
}

#[test]
fn test_malformed_structured_prompt_is_fatal() {
    let err = yaml_doc("messages: [unclosed").parse().unwrap_err();
    assert!(matches!(err, PrunError::MalformedInput(_)));
}

#[test]
fn test_message_without_role_is_fatal() {
    let err = yaml_doc("messages:\n  - content: hi\n").parse().unwrap_err();
    assert!(matches!(err, PrunError::MalformedInput(_)));
}

// =========================================================================
// Text documents
// =========================================================================

#[test]
fn test_parse_text_with_frontmatter() {
    let prompt = text_doc(TEXT_PROMPT).parse().unwrap();

    assert_eq!(prompt.name.as_deref(), Some("summarize"));
    assert_eq!(prompt.model, None);
    let requirements = prompt.requirements.as_ref().unwrap();
    assert_eq!(requirements.tools, Some(vec!["Read".to_string()]));
    assert_eq!(requirements.directories, vec!["docs".to_string()]);
    assert_eq!(
        prompt.body,
        Body::Flat("Summarize {{topic}} in three bullet points.\n".to_string())
    );
    assert_eq!(prompt.required_variables(), names(&["topic"]));
}

#[test]
fn test_text_without_frontmatter_is_unchanged() {
    let content = "\n\n  Plain prompt about {{x}}\n---\nnot frontmatter\n";
    let prompt = text_doc(content).parse().unwrap();

    assert_eq!(prompt.name, None);
    assert_eq!(prompt.requirements, None);
    assert_eq!(prompt.body, Body::Flat(content.to_string()));
    assert!(prompt.warnings.is_empty());
}

#[test]
fn test_malformed_frontmatter_falls_back_with_warning() {
    let content = "---\nname: [unclosed\n---\nBody after {{x}}\n";
    let prompt = text_doc(content).parse().unwrap();

    assert_eq!(prompt.name, None);
    assert_eq!(prompt.requirements, None);
    assert_eq!(prompt.body, Body::Flat("Body after {{x}}\n".to_string()));
    assert_eq!(prompt.warnings.len(), 1);
    assert!(prompt.warnings[0].contains("malformed frontmatter"));
}

#[test]
fn test_frontmatter_of_wrong_shape_falls_back() {
    let prompt = text_doc("---\njust a sentence\n---\nbody").parse().unwrap();
    assert_eq!(prompt.body, Body::Flat("body".to_string()));
    assert_eq!(prompt.warnings.len(), 1);
}

#[test]
fn test_empty_frontmatter_block() {
    let prompt = text_doc("---\n---\nbody").parse().unwrap();
    assert_eq!(prompt.name, None);
    assert_eq!(prompt.body, Body::Flat("body".to_string()));
    assert!(prompt.warnings.is_empty());
}

#[test]
fn test_unknown_frontmatter_fields_ignored() {
    let prompt = text_doc("---\nauthor: someone\nname: x\n---\nbody").parse().unwrap();
    assert_eq!(prompt.name.as_deref(), Some("x"));
    assert!(prompt.warnings.is_empty());
}

// =========================================================================
// Frontmatter splitting
// =========================================================================

#[test]
fn test_split_requires_opening_delimiter_on_first_line() {
    assert_eq!(split_frontmatter("text\n---\nname: x\n---\n"), None);
    assert_eq!(split_frontmatter(" ---\nname: x\n---\n"), None);
    assert_eq!(split_frontmatter("----\nname: x\n---\n"), None);
}

#[test]
fn test_split_requires_closing_delimiter() {
    assert_eq!(split_frontmatter("---\nname: x\nbody"), None);
    assert_eq!(split_frontmatter("---"), None);
}

#[test]
fn test_split_stops_at_first_closing_delimiter() {
    let (block, body) = split_frontmatter("---\na: 1\n---\nintro\n---\nmore\n").unwrap();
    assert_eq!(block, "a: 1\n");
    assert_eq!(body, "intro\n---\nmore\n");
}

#[test]
fn test_split_accepts_crlf() {
    let (block, body) = split_frontmatter("---\r\na: 1\r\n---\r\nbody\r\n").unwrap();
    assert_eq!(block, "a: 1\r\n");
    assert_eq!(body, "body\r\n");
}

#[test]
fn test_split_delimiter_at_end_of_file() {
    let (block, body) = split_frontmatter("---\na: 1\n---").unwrap();
    assert_eq!(block, "a: 1\n");
    assert_eq!(body, "");
}

// =========================================================================
// Reading
// =========================================================================

#[test]
fn test_read_detects_format() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "review.prompt.yaml", STRUCTURED_PROMPT);

    let doc = RawDocument::read(&path).unwrap();
    assert_eq!(doc.format, DocumentFormat::StructuredYaml);
    assert_eq!(doc.content, STRUCTURED_PROMPT);
}

#[test]
fn test_read_rejects_extension_before_opening() {
    let err = RawDocument::read("/does/not/exist.json").unwrap_err();
    assert!(matches!(err, PrunError::UnsupportedFormat(_)));
}

#[test]
fn test_read_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = RawDocument::read(temp.path().join("gone.md")).unwrap_err();
    assert!(matches!(err, PrunError::NotFound(_)));
}

// =========================================================================
// Resolution
// =========================================================================

fn resolver_fixture() -> (TempDir, PromptResolver, FakeHost) {
    let temp = TempDir::new().unwrap();
    let prompts = temp.path().join("prompts");
    let work = temp.path().join("work");
    std::fs::create_dir_all(&prompts).unwrap();
    std::fs::create_dir_all(&work).unwrap();
    let host = FakeHost::new(&work);
    (temp, PromptResolver::new(prompts), host)
}

#[test]
fn test_resolve_prefers_structured_extension() {
    let (_temp, resolver, host) = resolver_fixture();
    write_file(resolver.search_dir(), "foo.md", "md");
    write_file(resolver.search_dir(), "foo.prompt.yaml", "messages: []");
    write_file(resolver.search_dir(), "foo.txt", "txt");

    let path = resolver.resolve("foo", &host).unwrap();
    assert_eq!(path, resolver.search_dir().join("foo.prompt.yaml"));
}

#[test]
fn test_resolve_markdown_before_text() {
    let (_temp, resolver, host) = resolver_fixture();
    write_file(resolver.search_dir(), "bar.txt", "txt");
    write_file(resolver.search_dir(), "bar.md", "md");

    let path = resolver.resolve("bar", &host).unwrap();
    assert_eq!(path, resolver.search_dir().join("bar.md"));
}

#[test]
fn test_resolve_direct_path_wins() {
    let (temp, resolver, host) = resolver_fixture();
    write_file(resolver.search_dir(), "local.prompt.yaml", "messages: []");
    let direct = write_file(&temp.path().join("work"), "local", "whatever");

    assert_eq!(resolver.resolve("local", &host).unwrap(), direct);

    let other = write_file(temp.path(), "elsewhere/notes.rst", "x");
    assert_eq!(
        resolver.resolve(&other.to_string_lossy(), &host).unwrap(),
        other
    );
}

#[test]
fn test_resolve_no_fallback_once_extension_present() {
    let (_temp, resolver, host) = resolver_fixture();
    write_file(resolver.search_dir(), "missing.prompt.yaml", "messages: []");
    write_file(resolver.search_dir(), "missing.txt.prompt.yaml", "messages: []");

    let err = resolver.resolve("missing.txt", &host).unwrap_err();
    assert!(matches!(err, PrunError::NotFound(_)));
}

#[test]
fn test_resolve_not_found_lists_candidates() {
    let (_temp, resolver, host) = resolver_fixture();

    let err = resolver.resolve("ghost", &host).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("prompt 'ghost' not found"));
    assert!(msg.contains("ghost.prompt.yaml"));
    assert!(msg.contains("ghost.md"));
    assert!(msg.contains("ghost.txt"));
}

#[test]
fn test_resolve_ignores_directories() {
    let (_temp, resolver, host) = resolver_fixture();
    std::fs::create_dir_all(resolver.search_dir().join("dir.md")).unwrap();
    std::fs::create_dir_all(host.expand("dir").unwrap()).unwrap();

    assert!(resolver.resolve("dir", &host).is_err());
}

// =========================================================================
// Listing
// =========================================================================

#[test]
fn test_available_lists_supported_files_sorted() {
    let (_temp, resolver, _host) = resolver_fixture();
    write_file(resolver.search_dir(), "zeta.md", "");
    write_file(resolver.search_dir(), "alpha.txt", "");
    write_file(resolver.search_dir(), "alpha.prompt.yaml", "");
    write_file(resolver.search_dir(), "ignored.json", "");
    write_file(resolver.search_dir(), "plain.yaml", "");

    let entries = resolver.available().unwrap();
    let listed: Vec<_> = entries
        .iter()
        .map(|e| e.path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(listed, vec!["alpha.prompt.yaml", "alpha.txt", "zeta.md"]);
    assert_eq!(entries[0].name, "alpha");
}

#[test]
fn test_available_missing_directory_is_empty() {
    let resolver = PromptResolver::new("/definitely/not/a/prompts/dir");
    assert!(resolver.available().unwrap().is_empty());
}
