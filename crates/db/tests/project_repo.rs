//! Integration tests for `ProjectRepo` against a real database.

use atelier_core::portfolio::{Page, PortfolioFilter};
use atelier_core::project::ProjectDraft;
use atelier_db::models::project::UpdateProjectFlags;
use atelier_db::repositories::ProjectRepo;
use sqlx::PgPool;

fn draft(title: &str, categories: &[&str], technologies: &[&str]) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: format!("{title} description"),
        images: vec!["https://cdn.example.com/cover.png".to_string()],
        categories: categories.iter().map(|s| s.to_string()).collect(),
        technologies: technologies.iter().map(|s| s.to_string()).collect(),
        live_url: Some("https://example.com".to_string()),
        source_url: None,
        is_hidden: None,
        is_starred: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_round_trips_lists_in_order(pool: PgPool) {
    let mut input = draft("Shop", &["E-commerce"], &["Rust", "Svelte"]);
    input.images = vec![
        "https://cdn.example.com/b.png".to_string(),
        "https://cdn.example.com/a.png".to_string(),
    ];

    let project = ProjectRepo::create(&pool, &input).await.unwrap();

    assert_eq!(project.images, input.images);
    assert_eq!(project.technologies, vec!["Rust", "Svelte"]);
    assert!(!project.is_hidden);
    assert!(!project.is_starred);
    assert_eq!(project.live_url.as_deref(), Some("https://example.com"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn max_images_enforced_by_schema(pool: PgPool) {
    let mut input = draft("Gallery", &["Web"], &[]);
    input.images = (0..6).map(|i| format!("https://cdn.example.com/{i}.png")).collect();

    assert!(ProjectRepo::create(&pool, &input).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn visible_listing_hides_hidden_and_puts_starred_first(pool: PgPool) {
    let older = ProjectRepo::create(&pool, &draft("Older", &["Web"], &[])).await.unwrap();
    let hidden = ProjectRepo::create(&pool, &draft("Hidden", &["Web"], &[])).await.unwrap();
    let newer = ProjectRepo::create(&pool, &draft("Newer", &["Web"], &[])).await.unwrap();

    ProjectRepo::update_flags(
        &pool,
        hidden.id,
        &UpdateProjectFlags {
            is_hidden: Some(true),
            is_starred: None,
        },
    )
    .await
    .unwrap();
    ProjectRepo::update_flags(
        &pool,
        older.id,
        &UpdateProjectFlags {
            is_hidden: None,
            is_starred: Some(true),
        },
    )
    .await
    .unwrap();

    let filter = PortfolioFilter::default();
    let page = ProjectRepo::list_visible(&pool, &filter, Page::new(None, None))
        .await
        .unwrap();
    let ids: Vec<_> = page.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);
    assert_eq!(ProjectRepo::count_visible(&pool, &filter).await.unwrap(), 2);

    // The admin listing still sees everything.
    assert_eq!(ProjectRepo::list_all(&pool).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn visible_listing_filters_tags_case_insensitively(pool: PgPool) {
    ProjectRepo::create(&pool, &draft("App", &["Mobile"], &["Flutter"])).await.unwrap();
    ProjectRepo::create(&pool, &draft("Site", &["Web"], &["Rust"])).await.unwrap();
    ProjectRepo::create(&pool, &draft("Api", &["Web"], &["Go"])).await.unwrap();

    let web = PortfolioFilter::new(Some("WEB"), None, false);
    assert_eq!(ProjectRepo::count_visible(&pool, &web).await.unwrap(), 2);

    let web_rust = PortfolioFilter::new(Some("web"), Some("rust"), false);
    let rows = ProjectRepo::list_visible(&pool, &web_rust, Page::new(None, None))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Site");

    let starred = PortfolioFilter::new(None, None, true);
    assert_eq!(ProjectRepo::count_visible(&pool, &starred).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn visible_listing_paginates(pool: PgPool) {
    for i in 0..5 {
        ProjectRepo::create(&pool, &draft(&format!("P{i}"), &["Web"], &[]))
            .await
            .unwrap();
    }

    let filter = PortfolioFilter::default();
    let second = ProjectRepo::list_visible(&pool, &filter, Page::new(Some(2), Some(2)))
        .await
        .unwrap();
    let titles: Vec<_> = second.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["P2", "P1"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_keeps_flags_when_absent(pool: PgPool) {
    let mut input = draft("Shop", &["Web"], &[]);
    input.is_starred = Some(true);
    let project = ProjectRepo::create(&pool, &input).await.unwrap();

    let mut replacement = draft("Shop v2", &["Web", "E-commerce"], &["Rust"]);
    replacement.live_url = None;
    let updated = ProjectRepo::replace(&pool, project.id, &replacement)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Shop v2");
    assert_eq!(updated.categories, vec!["Web", "E-commerce"]);
    assert_eq!(updated.live_url, None);
    assert!(updated.is_starred);
    assert!(updated.updated_at >= project.updated_at);

    assert!(ProjectRepo::replace(&pool, 999_999, &replacement)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_project(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &draft("Gone", &["Web"], &[])).await.unwrap();

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());
    assert!(ProjectRepo::find_by_id(&pool, project.id).await.unwrap().is_none());
    assert!(!ProjectRepo::delete(&pool, project.id).await.unwrap());
}
