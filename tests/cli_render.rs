//! E2E tests for render mode (`njk <glob> -r`)

mod common;

use common::*;

#[test]
fn renders_templates_into_out_dir_skipping_layouts() {
    let env = TestEnv::with_files(&[
        ("_layout.njk", LAYOUT),
        ("index.njk", PAGE),
        ("blog/post.njk", PAGE),
        ("data.json", r#"{"title": "Hi"}"#),
    ]);

    let result = env.run(&["**/*.njk", "data.json", "-r", "-D", "dist"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read("dist/index.html"), "<main>Hi</main>");
    assert_eq!(env.read("dist/blog/post.html"), "<main>Hi</main>");
    assert_not_written!(env, "dist/_layout.html");
}

#[test]
fn renders_next_to_sources_without_out_dir() {
    let env = TestEnv::with_files(&[("_layout.njk", LAYOUT), ("page.njk", PAGE)]);

    let result = env.run(&["*.njk", "-r"]);

    assert!(result.success, "{}", result.combined_output());
    assert_written!(env, "page.html");
}

#[test]
fn extension_flag_overrides_output_extension() {
    let env = TestEnv::with_files(&[("page.njk", "plain")]);

    let result = env.run(&["*.njk", "-r", "-e", "htm"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read("page.htm"), "plain");
}

#[test]
fn path_flag_sets_template_root() {
    let env = TestEnv::with_files(&[("src/_layout.njk", LAYOUT), ("src/index.njk", PAGE)]);

    let result = env.run(&["*.njk", "-p", "src", "-r", "--out", "public"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read("public/index.html"), "<main></main>");
}

#[test]
fn output_is_autoescaped_unless_unsafe() {
    let env = TestEnv::with_files(&[
        ("page.njk", "{{ html }}"),
        ("data.json", r#"{"html": "<b>x</b>"}"#),
    ]);

    assert!(env.run(&["*.njk", "data.json", "-r"]).success);
    assert!(env.read("page.html").starts_with("&lt;b&gt;"));

    assert!(env.run(&["*.njk", "data.json", "-r", "-u"]).success);
    assert_eq!(env.read("page.html"), "<b>x</b>");
}

#[test]
fn environment_is_exposed_as_env() {
    let env = TestEnv::with_files(&[("page.njk", "{{ env.NJK_GREETING }}")]);

    let result = env.run_with_env(&["*.njk", "-r"], &[("NJK_GREETING", "hello")]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read("page.html"), "hello");
}

#[test]
fn failing_template_is_reported_and_siblings_still_render() {
    let env = TestEnv::with_files(&[("a.njk", "ok"), ("b.njk", BROKEN), ("c.njk", "ok")]);

    let result = env.run(&["*.njk", "-r"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("b.njk"), "{}", result.stderr);
    assert_written!(env, "a.html");
    assert_written!(env, "c.html");
    assert_not_written!(env, "b.html");
}

#[test]
fn builtin_extension_adds_filters() {
    let env = TestEnv::with_files(&[("page.njk", "{{ 'Hello World' | slugify }}")]);

    let result = env.run(&["*.njk", "-r", "-E", "strings"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read("page.html"), "hello-world");
}

#[test]
fn json_module_extension_adds_globals() {
    let env = TestEnv::with_files(&[
        ("page.njk", "{{ site }}"),
        ("globals.json", r#"{"site": "Acme"}"#),
    ]);

    let result = env.run(&["*.njk", "-r", "-E", "./globals.json"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.read("page.html"), "Acme");
}

#[test]
fn unknown_extension_type_is_fatal() {
    let env = TestEnv::with_files(&[("page.njk", "x"), ("ext.json", "[1, 2]")]);

    let result = env.run(&["*.njk", "-r", "-E", "./ext.json"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("Unknown extension type"),
        "{}",
        result.stderr
    );
    assert_not_written!(env, "page.html");
}

#[test]
fn json_flag_emits_ndjson_events() {
    let env = TestEnv::with_files(&[("page.njk", "x")]);

    let result = env.run(&["*.njk", "-r", "--json"]);

    assert!(result.success, "{}", result.combined_output());
    let kinds: Vec<String> = result
        .events()
        .iter()
        .filter_map(|e| e["event"].as_str().map(String::from))
        .collect();
    assert_eq!(kinds, vec!["render_started", "file_written", "render_complete"]);
}

#[test]
fn invalid_glob_fails() {
    let env = TestEnv::with_files(&[("page.njk", "x")]);

    let result = env.run(&["[", "-r"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("cannot expand pattern"), "{}", result.stderr);
}
