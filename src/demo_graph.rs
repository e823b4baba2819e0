use chrono::{Duration, Utc};
use graph::{build_dashboard, Author, CommitRecord, CommitStats, DashboardOptions, FixedConflictFiles, TextRenderer};

fn commit(sha: &str, parents: &[&str], message: &str, total: u64, days_ago: i64) -> CommitRecord {
    CommitRecord::new(
        sha,
        parents.iter().map(|p| p.to_string()).collect(),
        Author {
            name: "Demo".to_string(),
            email: "demo@example.com".to_string(),
            date: Utc::now() - Duration::days(days_ago),
            avatar_url: None,
        },
        message,
    )
    .with_stats(CommitStats {
        additions: total,
        deletions: 0,
        total,
    })
}

fn main() {
    println!("gitscope Graph Demo");
    println!("===================\n");

    // Newest first, as a GitHub feed delivers it
    let window = vec![
        commit("f6a1c2d", &["e5b9a01", "d4c7e33"], "Merge branch 'hotfix/login'", 12, 0),
        commit("e5b9a01", &["c3d2f10"], "release: v1.2.0", 4, 1),
        commit("d4c7e33", &["c3d2f10"], "fix: login redirect loop", 180, 2),
        commit("c3d2f10", &["b2e8a77"], "feat: BREAKING new auth flow", 1400, 3),
        commit("b2e8a77", &["a1f0c5e"], "docs: setup guide", 30, 4),
        commit("a1f0c5e", &["0000000"], "initial import", 90, 5),
    ];

    let dashboard = build_dashboard(&window, &DashboardOptions::default(), FixedConflictFiles::prefix(2));

    let stats = dashboard.graph().stats();
    println!("Window statistics:");
    println!("  Total commits: {}", stats.total_commits);
    println!("  Merge commits: {}", stats.merge_commits);
    println!("  Dangling parents: {}", stats.dangling_parents);
    println!();

    println!("Commit Graph:");
    println!("─────────────");
    print!("{}", TextRenderer::new(80).render(&dashboard.graph(), None));

    println!("\nAlerts:");
    for alert in &dashboard.alerts {
        println!("  {} -> {}", alert.id, alert.action.as_ref().map(|a| a.command.as_str()).unwrap_or(""));
    }

    println!("\nRecommendations:");
    for rec in &dashboard.recommendations {
        println!("  {} ({:?})", rec.title, rec.priority);
    }
}
