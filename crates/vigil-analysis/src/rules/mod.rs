//! Static rule stages — compiled once, shared read-only across all
//! classifications.
//!
//! Each stage answers one question: does the snippet contain any of the
//! stage's patterns? Matching is case-sensitive over the raw snippet with
//! `.` spanning newlines; no comment stripping or whitespace normalization
//! happens first. That is a deliberate simplicity/precision trade-off: a
//! pattern inside a comment still matches.

pub mod tables;

use regex::{Regex, RegexSet, RegexSetBuilder};

use vigil_core::errors::RuleSetError;

/// A named pattern belonging to one stage. Static, process-wide data.
#[derive(Debug, Clone, Copy)]
pub struct RulePattern {
    pub id: &'static str,
    pub pattern: &'static str,
}

/// The four rule tables plus the safe-function exception gate.
///
/// [`RuleTables::default`] returns the shipped tables; custom tables are for
/// callers that need to tune a stage without forking the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct RuleTables {
    pub safe_override: &'static [RulePattern],
    pub structural_clean: &'static [RulePattern],
    pub manual_defect: &'static [RulePattern],
    pub static_danger: &'static [RulePattern],
    /// Bounded-API names that suppress the StaticDanger stage entirely.
    /// Plain substring match, not regex.
    pub safe_function_names: &'static [&'static str],
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            safe_override: tables::SAFE_OVERRIDE,
            structural_clean: tables::STRUCTURAL_CLEAN,
            manual_defect: tables::MANUAL_DEFECT,
            static_danger: tables::STATIC_DANGER,
            safe_function_names: tables::SAFE_FUNCTION_NAMES,
        }
    }
}

/// One compiled pattern stage.
#[derive(Debug)]
pub struct RuleStage {
    name: &'static str,
    patterns: &'static [RulePattern],
    set: RegexSet,
}

impl RuleStage {
    /// Compile a stage. Any invalid pattern fails the whole stage.
    pub fn compile(
        name: &'static str,
        patterns: &'static [RulePattern],
    ) -> Result<Self, RuleSetError> {
        let set = RegexSetBuilder::new(patterns.iter().map(|p| p.pattern))
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| RuleSetError::InvalidPattern {
                stage: name,
                message: e.to_string(),
            })?;
        Ok(Self {
            name,
            patterns,
            set,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Does the snippet contain any of this stage's patterns?
    pub fn is_match(&self, code: &str) -> bool {
        self.set.is_match(code)
    }

    /// IDs of every pattern that matched, for explainability.
    pub fn matched_ids(&self, code: &str) -> Vec<&'static str> {
        self.set
            .matches(code)
            .into_iter()
            .filter_map(|idx| self.patterns.get(idx).map(|p| p.id))
            .collect()
    }
}

/// All four stages compiled, plus the freed-then-indexed matcher.
///
/// The freed-then-indexed check (free of a variable followed later by
/// indexing of the same variable) needs a backreference, which the `regex`
/// crate does not support, so it is a capture-then-search pass with the
/// same semantics.
pub struct CompiledRules {
    safe_override: RuleStage,
    structural_clean: RuleStage,
    manual_defect: RuleStage,
    static_danger: RuleStage,
    safe_function_names: &'static [&'static str],
    free_call: Regex,
}

impl CompiledRules {
    /// Compile the shipped rule tables.
    pub fn compile() -> Result<Self, RuleSetError> {
        Self::with_tables(RuleTables::default())
    }

    /// Compile custom tables.
    pub fn with_tables(rule_tables: RuleTables) -> Result<Self, RuleSetError> {
        let free_call =
            Regex::new(tables::FREE_CALL).map_err(|e| RuleSetError::InvalidPattern {
                stage: "manual_defect",
                message: e.to_string(),
            })?;
        Ok(Self {
            safe_override: RuleStage::compile("safe_override", rule_tables.safe_override)?,
            structural_clean: RuleStage::compile(
                "structural_clean",
                rule_tables.structural_clean,
            )?,
            manual_defect: RuleStage::compile("manual_defect", rule_tables.manual_defect)?,
            static_danger: RuleStage::compile("static_danger", rule_tables.static_danger)?,
            safe_function_names: rule_tables.safe_function_names,
            free_call,
        })
    }

    /// Stage 1: explicitly-safe bounded APIs.
    pub fn safe_override_matches(&self, code: &str) -> bool {
        self.safe_override.is_match(code)
    }

    /// Stage 2: defensive coding idioms.
    pub fn structural_clean_matches(&self, code: &str) -> bool {
        self.structural_clean.is_match(code)
    }

    /// Stage 3: unconditionally unsafe APIs and idioms.
    pub fn manual_defect_matches(&self, code: &str) -> bool {
        self.manual_defect.is_match(code) || self.freed_then_indexed(code)
    }

    /// Stage 4: dangerous APIs, gated on the safe-function names.
    ///
    /// Reports no match if the snippet contains any safe-function name,
    /// regardless of other pattern hits.
    pub fn static_danger_matches(&self, code: &str) -> bool {
        if self
            .safe_function_names
            .iter()
            .any(|name| code.contains(name))
        {
            return false;
        }
        self.static_danger.is_match(code)
    }

    pub fn safe_override(&self) -> &RuleStage {
        &self.safe_override
    }

    pub fn structural_clean(&self) -> &RuleStage {
        &self.structural_clean
    }

    pub fn manual_defect(&self) -> &RuleStage {
        &self.manual_defect
    }

    pub fn static_danger(&self) -> &RuleStage {
        &self.static_danger
    }

    /// `free(x)` followed anywhere later by `x[` — the use-after-free idiom.
    fn freed_then_indexed(&self, code: &str) -> bool {
        for caps in self.free_call.captures_iter(code) {
            let (Some(full), Some(var)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let tail = &code[full.end()..];
            let var = var.as_str();
            if tail
                .match_indices(var)
                .any(|(pos, _)| tail[pos + var.len()..].trim_start().starts_with('['))
            {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> CompiledRules {
        CompiledRules::compile().unwrap()
    }

    #[test]
    fn test_safe_override_matches_bounded_apis() {
        let rules = rules();
        assert!(rules.safe_override_matches(r#"snprintf(buf, sizeof(buf), "%s", x);"#));
        assert!(rules.safe_override_matches("strncpy(dst, src, n);"));
        assert!(rules.safe_override_matches("memcpy(dst, src, n);"));
        assert!(!rules.safe_override_matches("strcpy(dst, src);"));
    }

    #[test]
    fn test_structural_clean_matches_defensive_idioms() {
        let rules = rules();
        assert!(rules.structural_clean_matches("if (!p) return;"));
        assert!(rules.structural_clean_matches("if (p == NULL) { abort(); }"));
        assert!(rules.structural_clean_matches("if (index < 0 || index >= len) return -1;"));
        assert!(rules.structural_clean_matches("p = malloc(n); if (!p) return;"));
        assert!(rules.structural_clean_matches("free(p);"));
        assert!(rules.structural_clean_matches("return a * b;"));
        assert!(!rules.structural_clean_matches("int x = y;"));
    }

    #[test]
    fn test_manual_defect_matches_unsafe_apis() {
        let rules = rules();
        assert!(rules.manual_defect_matches(r#"strcpy(a, "too long");"#));
        assert!(rules.manual_defect_matches("gets(buf);"));
        assert!(rules.manual_defect_matches(r#"sprintf(buf, "%s", x);"#));
        assert!(rules.manual_defect_matches(r#"scanf("%s", name);"#));
        assert!(rules.manual_defect_matches("return &local;"));
        assert!(!rules.manual_defect_matches("printf(\"hello\");"));
    }

    #[test]
    fn test_scanf_with_width_is_not_manual_defect() {
        // Width-less %s is the defect; a bounded %31s is not.
        let rules = rules();
        assert!(!rules.manual_defect_matches(r#"scanf("%31s", name);"#));
    }

    #[test]
    fn test_freed_then_indexed_spans_lines() {
        let rules = rules();
        let code = "free(p);\nprintf(\"%c\", p[0]);";
        assert!(rules.manual_defect_matches(code));
    }

    #[test]
    fn test_free_without_later_index_is_not_manual_defect() {
        let rules = rules();
        assert!(!rules.manual_defect_matches("free(p);\nreturn;"));
        // Indexing a different variable does not count.
        assert!(!rules.manual_defect_matches("free(p);\nq[0] = 1;"));
    }

    #[test]
    fn test_index_before_free_is_not_manual_defect() {
        let rules = rules();
        assert!(!rules.manual_defect_matches("p[0] = 1;\nfree(p);"));
    }

    #[test]
    fn test_static_danger_gated_by_safe_function_names() {
        let rules = rules();
        assert!(rules.static_danger_matches("strcpy(dst, src);"));
        // The mere presence of a bounded API name suppresses the stage.
        assert!(!rules.static_danger_matches("strcpy(dst, src); memcpy(a, b, n);"));
        assert!(!rules.static_danger_matches("int x = 1;"));
    }

    #[test]
    fn test_matched_ids_reports_patterns() {
        let rules = rules();
        let ids = rules.manual_defect().matched_ids("gets(buf); sprintf(b, x);");
        assert!(ids.contains(&"unchecked-gets"));
        assert!(ids.contains(&"unbounded-sprintf"));
    }

    #[test]
    fn test_invalid_pattern_fails_stage_compilation() {
        const BAD: &[RulePattern] = &[RulePattern {
            id: "broken",
            pattern: r"\bfoo\s*(",
        }];
        let err = RuleStage::compile("safe_override", BAD).unwrap_err();
        assert!(matches!(
            err,
            RuleSetError::InvalidPattern {
                stage: "safe_override",
                ..
            }
        ));
    }
}
