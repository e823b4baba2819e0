use chrono::{DateTime, Datelike, Duration, Months, Utc};
use serde::Serialize;
use tracing::debug;

use super::alert::Alert;
use super::config::AnalyzerConfig;
use super::conflict::{ConflictFileResolver, RandomConflictFiles};
use super::recommendation::Recommendation;
use crate::core::CommitGraph;

/// Alerts and recommendations for one commit window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskReport {
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<Recommendation>,
}

/// Scans a laid-out commit window for risk signals
#[derive(Debug, Clone, Default)]
pub struct RiskAnalyzer<R = RandomConflictFiles> {
    config: AnalyzerConfig,
    resolver: R,
}

impl RiskAnalyzer<RandomConflictFiles> {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            resolver: RandomConflictFiles,
        }
    }
}

impl<R: ConflictFileResolver> RiskAnalyzer<R> {
    pub fn with_resolver(config: AnalyzerConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, graph: &mut CommitGraph) -> RiskReport {
        self.analyze_at(graph, Utc::now())
    }

    /// Annotate conflict risk on every node, then derive alerts (per node,
    /// oldest first) and recommendations (once per window).
    pub fn analyze_at(&self, graph: &mut CommitGraph, now: DateTime<Utc>) -> RiskReport {
        let mut alerts = Vec::new();

        for node in graph.nodes.iter_mut() {
            node.is_conflict_risk = self.config.is_conflict_risk(node);
            node.conflict_files = if node.is_conflict_risk {
                Some(self.resolver.resolve(node))
            } else {
                None
            };

            if node.is_conflict_risk {
                alerts.push(Alert::conflict(
                    &node.sha,
                    node.summary(),
                    node.conflict_files.clone(),
                ));
            }
            if self.config.is_large_fix(node) {
                alerts.push(Alert::large_fix(&node.sha, node.total_changes()));
            }
        }

        let recommendations = self.recommend(graph, now);
        debug!(
            alerts = alerts.len(),
            recommendations = recommendations.len(),
            "analyzed commit window"
        );

        RiskReport {
            alerts,
            recommendations,
        }
    }

    fn recommend(&self, graph: &CommitGraph, now: DateTime<Utc>) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        let feature_branches: Vec<&str> = graph
            .branches
            .iter()
            .filter(|b| b.name.contains("feature"))
            .map(|b| b.name.as_str())
            .collect();
        if let Some(rec) = Recommendation::merge_features(&feature_branches) {
            recommendations.push(rec);
        }

        if self.stale_commit_count(graph, now) > self.config.stale_commit_count {
            recommendations.push(Recommendation::cleanup_history());
        }

        if graph.nodes.iter().any(|n| self.config.is_security_sized(n)) {
            recommendations.push(Recommendation::security_review());
        }

        recommendations
    }

    fn stale_commit_count(&self, graph: &CommitGraph, now: DateTime<Utc>) -> usize {
        let Some(cutoff) = months_before(now, self.config.stale_months) else {
            return 0;
        };
        graph
            .nodes
            .iter()
            .filter(|n| n.author.date < cutoff)
            .count()
    }
}

/// `now` moved back by whole calendar months, keeping the day of month.
/// A day past the end of the target month rolls into the next one
/// (Aug 31 minus 6 months is Mar 2 in a leap year), instead of clamping.
fn months_before(now: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    let first = now.with_day(1)?.checked_sub_months(Months::new(months))?;
    first.checked_add_signed(Duration::days(i64::from(now.day()) - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::alert::AlertKind;
    use crate::analysis::conflict::FixedConflictFiles;
    use crate::analysis::recommendation::{Priority, RecommendationKind};
    use crate::core::{Author, CommitRecord, CommitStats};
    use crate::layout::layout;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn commit_at(
        sha: &str,
        parents: &[&str],
        message: &str,
        total: Option<u64>,
        date: DateTime<Utc>,
    ) -> CommitRecord {
        let record = CommitRecord::new(
            sha,
            parents.iter().map(|p| p.to_string()).collect(),
            Author {
                name: "Author".to_string(),
                email: "author@example.com".to_string(),
                date,
                avatar_url: None,
            },
            message,
        );
        match total {
            Some(total) => record.with_stats(CommitStats {
                additions: total,
                deletions: 0,
                total,
            }),
            None => record,
        }
    }

    fn commit(sha: &str, parents: &[&str], message: &str, total: Option<u64>) -> CommitRecord {
        commit_at(sha, parents, message, total, now() - Duration::days(1))
    }

    fn analyzer() -> RiskAnalyzer<FixedConflictFiles> {
        RiskAnalyzer::with_resolver(AnalyzerConfig::default(), FixedConflictFiles::prefix(2))
    }

    fn run(window: &[CommitRecord]) -> (CommitGraph, RiskReport) {
        let mut graph = layout(window);
        let report = analyzer().analyze_at(&mut graph, now());
        (graph, report)
    }

    #[test]
    fn test_empty_window() {
        let (graph, report) = run(&[]);
        assert!(graph.nodes.is_empty());
        assert_eq!(report, RiskReport::default());
    }

    #[test]
    fn test_merge_is_conflict_risk_regardless_of_message() {
        let (graph, _) = run(&[
            commit("c3", &["a1", "b2"], "update readme", None),
            commit("b2", &[], "x", None),
            commit("a1", &[], "y", None),
        ]);
        let c3 = graph.node("c3").unwrap();
        assert!(c3.is_conflict_risk);
        assert_eq!(
            c3.conflict_files,
            Some(vec!["package.json".to_string(), "package-lock.json".to_string()])
        );
        assert!(!graph.node("b2").unwrap().is_conflict_risk);
        assert_eq!(graph.node("b2").unwrap().conflict_files, None);
    }

    #[test]
    fn test_size_threshold_is_strict() {
        let (graph, _) = run(&[
            commit("big", &[], "update tables", Some(201)),
            commit("edge", &[], "update tables", Some(200)),
        ]);
        assert!(graph.node("big").unwrap().is_conflict_risk);
        assert!(!graph.node("edge").unwrap().is_conflict_risk);
    }

    #[test]
    fn test_conflict_keywords() {
        for message in ["Resolve conflicts", "MERGE upstream", "conflict in lockfile"] {
            let (graph, _) = run(&[commit("a1", &[], message, None)]);
            assert!(graph.nodes[0].is_conflict_risk, "{message}");
        }
    }

    #[test]
    fn test_alerts_for_example_window() {
        let (graph, report) = run(&[
            commit("b2", &["a1", "c9"], "Merge conflict resolve\n\ndetails", Some(50)),
            commit("a1", &[], "feat: init", Some(10)),
        ]);
        assert!(graph.node("b2").unwrap().is_conflict_risk);
        assert_eq!(report.alerts.len(), 1);

        let alert = &report.alerts[0];
        assert_eq!(alert.id, "conflict-b2");
        assert_eq!(alert.kind, AlertKind::Conflict);
        assert_eq!(alert.description, "Possível conflito no commit \"Merge conflict resolve\"");
        assert_eq!(alert.related_commit.as_deref(), Some("b2"));
        assert_eq!(
            alert.action.as_ref().unwrap().command,
            "git checkout b2 && git merge --abort"
        );
    }

    #[test]
    fn test_large_fix_warning() {
        let (_, report) = run(&[
            commit("f2", &[], "fix: rewrite parser", Some(101)),
            commit("f1", &[], "fix: typo", Some(100)),
        ]);
        let ids: Vec<&str> = report.alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["large-fix-f2"]);
        assert_eq!(report.alerts[0].kind, AlertKind::Warning);
        assert_eq!(report.alerts[0].action.as_ref().unwrap().command, "git show f2");
    }

    #[test]
    fn test_one_commit_can_raise_both_alerts() {
        let (_, report) = run(&[commit("f1", &[], "fix: huge", Some(500))]);
        let ids: Vec<&str> = report.alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["conflict-f1", "large-fix-f1"]);
    }

    #[test]
    fn test_alert_ids_are_stable_across_runs() {
        let window = vec![
            commit("c3", &["a1", "b2"], "Merge", Some(300)),
            commit("b2", &[], "fix: big", Some(150)),
            commit("a1", &[], "init", None),
        ];
        let random = RiskAnalyzer::new(AnalyzerConfig::default());
        let ids = |report: RiskReport| -> Vec<String> {
            report.alerts.into_iter().map(|a| a.id).collect()
        };
        let first = ids(random.analyze_at(&mut layout(&window), now()));
        let second = ids(random.analyze_at(&mut layout(&window), now()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_resolver_stays_in_bounds() {
        let window = vec![commit("m", &["a", "b"], "Merge", None)];
        let random = RiskAnalyzer::new(AnalyzerConfig::default());
        for _ in 0..20 {
            let mut graph = layout(&window);
            random.analyze_at(&mut graph, now());
            let files = graph.nodes[0].conflict_files.clone().unwrap();
            assert!((1..=3).contains(&files.len()));
            assert_eq!(files[0], "package.json");
        }
    }

    #[test]
    fn test_no_recommendations_for_quiet_window() {
        let (_, report) = run(&[
            commit("b2", &["a1"], "docs: readme", Some(20)),
            commit("a1", &[], "initial commit", Some(10)),
        ]);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_feature_branch_recommendation() {
        let (_, report) = run(&[
            commit("b2", &["a1"], "feat: search", None),
            commit("a1", &[], "initial commit", None),
        ]);
        assert_eq!(report.recommendations.len(), 1);
        let rec = &report.recommendations[0];
        assert_eq!(rec.kind, RecommendationKind::Merge);
        assert_eq!(rec.priority, Priority::Medium);
        assert!(rec.description.contains("1 branch(es)"));
        assert_eq!(rec.commands[0].command, "git checkout main && git merge feature");
        assert_eq!(rec.commands[1].command, "git checkout feature && git rebase main");
    }

    #[test]
    fn test_cleanup_needs_more_than_fifty_stale_commits() {
        let old = now() - Duration::days(400);
        let stale = |n: usize| -> Vec<CommitRecord> {
            (0..n)
                .map(|i| commit_at(&format!("s{i}"), &[], "chore", None, old))
                .collect()
        };

        let (_, report) = run(&stale(50));
        assert!(report.recommendations.is_empty());

        let (_, report) = run(&stale(51));
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].id, "cleanup-history");
        assert_eq!(report.recommendations[0].priority, Priority::Low);
    }

    #[test]
    fn test_recommendation_order() {
        let old = now() - Duration::days(400);
        let mut window: Vec<CommitRecord> = (0..51)
            .map(|i| commit_at(&format!("s{i}"), &[], "chore", None, old))
            .collect();
        window.insert(0, commit("big", &[], "feat: vendor sdk", Some(1001)));

        let (_, report) = run(&window);
        let ids: Vec<&str> = report.recommendations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["merge-features", "cleanup-history", "security-review"]);
        assert_eq!(report.recommendations[2].priority, Priority::High);
        assert_eq!(
            report.recommendations[2].commands[1].command,
            r#"git log --follow -- "*.env" "*.key" "*.pem""#
        );
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let config = AnalyzerConfig {
            conflict_total_threshold: 10,
            ..AnalyzerConfig::default()
        };
        let analyzer = RiskAnalyzer::with_resolver(config, FixedConflictFiles::prefix(1));
        let mut graph = layout(&[commit("a1", &[], "tweak", Some(11))]);
        let report = analyzer.analyze_at(&mut graph, now());
        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.alerts[0].files, Some(vec!["package.json".to_string()]));
    }

    #[test]
    fn test_month_end_cutoff_rolls_over() {
        let end_of_august = Utc.with_ymd_and_hms(2024, 8, 31, 12, 0, 0).unwrap();
        assert_eq!(
            months_before(end_of_august, 6),
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap())
        );
        assert_eq!(
            months_before(now(), 6),
            Some(Utc.with_ymd_and_hms(2023, 12, 1, 12, 0, 0).unwrap())
        );

        let first_of_march = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let window: Vec<CommitRecord> = (0..51)
            .map(|i| commit_at(&format!("m{i}"), &[], "chore", None, first_of_march))
            .collect();
        let mut graph = layout(&window);
        let report = analyzer().analyze_at(&mut graph, end_of_august);
        let ids: Vec<&str> = report.recommendations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["cleanup-history"]);
    }

    #[test]
    fn test_zero_length_prefix_still_reports_a_file() {
        let analyzer = RiskAnalyzer::with_resolver(AnalyzerConfig::default(), FixedConflictFiles::prefix(0));
        let mut graph = layout(&[commit("m", &["a", "b"], "Merge", None)]);
        let report = analyzer.analyze_at(&mut graph, now());

        let expected = Some(vec!["package.json".to_string()]);
        assert_eq!(graph.nodes[0].conflict_files, expected);
        assert_eq!(report.alerts[0].files, expected);
    }
}
