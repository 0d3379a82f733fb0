//! Reusable template fixtures.

#![allow(dead_code)]

/// Base layout with a `body` block
pub const LAYOUT: &str = "<main>{% block body %}{% endblock %}</main>";

/// Page extending [`LAYOUT`] that prints `title`
pub const PAGE: &str =
    "{% extends '_layout.njk' %}{% block body %}{{ title }}{% endblock %}";

/// Template that does not parse
pub const BROKEN: &str = "{% if %}";
