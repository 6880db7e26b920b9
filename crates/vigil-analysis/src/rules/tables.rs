//! The shipped rule tables.
//!
//! Pattern text is preserved exactly from the calibrated rule set; evaluation
//! order and stage membership are part of the decision policy, so a pattern
//! appearing in both ManualDefect and StaticDanger is intentional.

use super::RulePattern;

/// Explicitly-safe bounded APIs. Any match is an unconditional clean verdict.
pub const SAFE_OVERRIDE: &[RulePattern] = &[
    RulePattern {
        id: "bounded-snprintf",
        pattern: r"\bsnprintf\s*\(",
    },
    RulePattern {
        id: "bounded-strncpy",
        pattern: r"\bstrncpy\s*\(",
    },
    RulePattern {
        id: "bounded-memcpy",
        pattern: r"\bmemcpy\s*\(",
    },
];

/// Defensive coding idioms. Any match is a clean verdict at reduced
/// confidence.
pub const STRUCTURAL_CLEAN: &[RulePattern] = &[
    RulePattern {
        id: "null-check-return",
        pattern: r"\bif\s*\(\s*!\s*\w+\s*\)\s*return",
    },
    RulePattern {
        id: "null-compare",
        pattern: r"\bif\s*\(\s*\w+\s*==\s*NULL\s*\)",
    },
    RulePattern {
        id: "bounds-check",
        pattern: r"\bindex\s*<\s*0\s*\|\|\s*index\s*>=\s*\w+",
    },
    RulePattern {
        id: "malloc-null-check",
        pattern: r"\bmalloc\s*\(.*\)\s*;\s*if\s*\(\s*!\w+\s*\)",
    },
    RulePattern {
        id: "matched-free",
        pattern: r"\bfree\s*\(\s*\w+\s*\)",
    },
    RulePattern {
        id: "simple-arithmetic-return",
        pattern: r"\breturn\s+\w+\s*[\*\+\-/]\s*\w+",
    },
];

/// Unconditionally unsafe APIs and idioms. Any match is an unconditional
/// defective verdict — this stage outranks the model entirely.
///
/// The freed-then-indexed idiom is part of this stage but lives in
/// [`FREE_CALL`] because it needs a capture, not a set membership test.
pub const MANUAL_DEFECT: &[RulePattern] = &[
    RulePattern {
        id: "unbounded-strcpy",
        pattern: r"\bstrcpy\s*\(",
    },
    RulePattern {
        id: "unchecked-gets",
        pattern: r"\bgets\s*\(",
    },
    RulePattern {
        id: "unbounded-sprintf",
        pattern: r"\bsprintf\s*\(",
    },
    RulePattern {
        id: "widthless-scanf",
        pattern: r#"\bscanf\s*\(\s*"%s"#,
    },
    RulePattern {
        id: "dangling-return",
        pattern: r"return\s*&\s*\w+",
    },
];

/// Dangerous APIs carried into the model stage as a boolean flag.
/// Suppressed wholesale when any [`SAFE_FUNCTION_NAMES`] entry is present.
pub const STATIC_DANGER: &[RulePattern] = &[
    RulePattern {
        id: "unbounded-strcpy",
        pattern: r"\bstrcpy\s*\(",
    },
    RulePattern {
        id: "unchecked-gets",
        pattern: r"\bgets\s*\(",
    },
    RulePattern {
        id: "unbounded-sprintf",
        pattern: r"\bsprintf\s*\(",
    },
    RulePattern {
        id: "widthless-scanf",
        pattern: r#"\bscanf\s*\(\s*"%s"#,
    },
];

/// Bounded-variant names that gate the StaticDanger stage.
pub const SAFE_FUNCTION_NAMES: &[&str] = &["snprintf", "strncpy", "memcpy"];

/// Captures the freed variable for the freed-then-indexed check.
pub const FREE_CALL: &str = r"\bfree\s*\(\s*(\w+)\s*\)";
