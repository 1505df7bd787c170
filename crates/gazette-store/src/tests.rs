use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use gazette_core::DomainError;
use gazette_core::domain::{NewComment, NewPost, NewUser, Post, PostPatch, PostView, UserPatch};
use gazette_core::ports::{CategoryStore, CommentStore, PostStore, StatsSource, UserStore};
use gazette_core::query::{PostQuery, SortKey, SortOrder};

use crate::MemoryContentStore;
use crate::seed::SeedData;

fn new_post(title: &str, published: bool) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: format!("Notes on {title}."),
        excerpt: format!("{title}, briefly."),
        cover_image: None,
        author_id: Uuid::new_v4(),
        category_id: Uuid::new_v4(),
        tags: Vec::new(),
        published,
        slug: None,
    }
}

fn standalone_post(slug: &str, published: bool, view_count: u64) -> Post {
    let now = Utc::now();
    Post {
        id: Uuid::new_v4(),
        title: "Standalone".to_string(),
        slug: slug.to_string(),
        content: "Body".to_string(),
        excerpt: "Short".to_string(),
        cover_image: None,
        author_id: Uuid::new_v4(),
        category_id: Uuid::new_v4(),
        tags: Vec::new(),
        published,
        published_at: published.then_some(now),
        created_at: now,
        updated_at: now,
        view_count,
    }
}

fn slugs(views: &[PostView]) -> Vec<&str> {
    views.iter().map(|view| view.post.slug.as_str()).collect()
}

#[tokio::test]
async fn demo_content_loads_with_expected_shape() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;
    let categories: &dyn CategoryStore = &store;
    let users: &dyn UserStore = &store;
    let comments: &dyn CommentStore = &store;

    assert_eq!(posts.all().await.len(), 6);
    assert_eq!(posts.published().await.len(), 5);
    assert_eq!(categories.all().await.len(), 5);
    assert_eq!(users.all().await.len(), 3);
    assert_eq!(comments.all().await.len(), 4);
}

#[tokio::test]
async fn published_listing_is_newest_first() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    assert_eq!(
        slugs(&posts.published().await),
        [
            "nextjs-15-new-features",
            "react-server-components-guide",
            "typescript-react-development",
            "css-in-js-to-css-modules-migration",
            "nextjs-beginner-complete-guide",
        ]
    );
}

#[tokio::test]
async fn create_derives_slug_and_initializes_counters() {
    let store = MemoryContentStore::new();
    let posts: &dyn PostStore = &store;

    let view = posts.create(new_post("Hello World", false)).await.unwrap();
    assert_eq!(view.post.slug, "hello-world");
    assert_eq!(view.post.view_count, 0);
    assert!(!view.post.published);
    assert!(view.post.published_at.is_none());
    assert_eq!(view.post.created_at, view.post.updated_at);
}

#[tokio::test]
async fn create_accepts_explicit_slug_and_stamps_publication() {
    let store = MemoryContentStore::new();
    let posts: &dyn PostStore = &store;

    let mut draft = new_post("Some Title", true);
    draft.slug = Some("custom-slug".to_string());
    let view = posts.create(draft).await.unwrap();

    assert_eq!(view.post.slug, "custom-slug");
    assert_eq!(view.post.published_at, Some(view.post.created_at));
}

#[tokio::test]
async fn create_rejects_duplicate_slug() {
    let store = MemoryContentStore::new();
    let posts: &dyn PostStore = &store;

    posts.create(new_post("Same Title", true)).await.unwrap();
    let err = posts.create(new_post("Same Title", false)).await.unwrap_err();
    assert!(matches!(err, DomainError::Duplicate(_)));
}

#[tokio::test]
async fn create_rejects_title_that_slugifies_to_nothing() {
    let store = MemoryContentStore::new();
    let posts: &dyn PostStore = &store;

    let err = posts.create(new_post("!!!", false)).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn update_merges_fields_and_refreshes_timestamp() {
    let store = MemoryContentStore::new();
    let posts: &dyn PostStore = &store;
    let created = posts.create(new_post("Original", false)).await.unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    let patch = PostPatch {
        title: Some("Updated".to_string()),
        tags: Some(vec!["rust".to_string()]),
        ..Default::default()
    };
    let updated = posts.update(created.post.id, patch).await.unwrap();

    assert_eq!(updated.post.title, "Updated");
    assert_eq!(updated.post.tags, ["rust"]);
    assert_eq!(updated.post.content, created.post.content);
    assert_eq!(updated.post.slug, created.post.slug);
    assert_eq!(updated.post.created_at, created.post.created_at);
    assert!(updated.post.updated_at > created.post.updated_at);
}

#[tokio::test]
async fn publishing_a_draft_stamps_publication_exactly_once() {
    let store = MemoryContentStore::new();
    let posts: &dyn PostStore = &store;
    let created = posts.create(new_post("Draft", false)).await.unwrap();

    let published = posts
        .update(
            created.post.id,
            PostPatch {
                published: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let stamp = published.post.published_at.expect("publication timestamp");

    tokio::time::sleep(Duration::from_millis(5)).await;
    let again = posts
        .update(
            created.post.id,
            PostPatch {
                published: Some(true),
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(again.post.published_at, Some(stamp));
}

#[tokio::test]
async fn unpublishing_is_rejected_without_side_effects() {
    let store = MemoryContentStore::new();
    let posts: &dyn PostStore = &store;
    let created = posts.create(new_post("Live", true)).await.unwrap();

    let err = posts
        .update(
            created.post.id,
            PostPatch {
                published: Some(false),
                title: Some("Mutated".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let after = posts.get(created.post.id).await.unwrap();
    assert_eq!(after.post.title, "Live");
    assert!(after.post.published);
}

#[tokio::test]
async fn update_of_unknown_post_is_not_found() {
    let store = MemoryContentStore::new();
    let posts: &dyn PostStore = &store;

    let err = posts
        .update(Uuid::new_v4(), PostPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "post", .. }));
}

#[tokio::test]
async fn delete_reports_outcome_and_keeps_indexes_consistent() {
    let store = MemoryContentStore::new();
    let posts: &dyn PostStore = &store;
    let first = posts.create(new_post("First", true)).await.unwrap();
    let second = posts.create(new_post("Second", true)).await.unwrap();
    let third = posts.create(new_post("Third", true)).await.unwrap();

    assert!(posts.delete(second.post.id).await);
    assert!(!posts.delete(second.post.id).await);

    assert!(posts.get(second.post.id).await.is_none());
    assert!(posts.find_by_slug("second").await.is_none());
    // Lookups behind the removed slot must still hit the right posts.
    assert_eq!(posts.get(third.post.id).await.unwrap().post.slug, "third");
    assert_eq!(
        posts.find_by_slug("first").await.unwrap().post.id,
        first.post.id
    );
}

#[tokio::test]
async fn plain_reads_never_touch_view_counts() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;
    let before = posts
        .find_by_slug("nextjs-15-new-features")
        .await
        .unwrap()
        .post
        .view_count;

    posts.all().await;
    posts.published().await;
    posts.search("react").await;
    posts.query(&PostQuery::default()).await;

    let after = posts
        .find_by_slug("nextjs-15-new-features")
        .await
        .unwrap()
        .post
        .view_count;
    assert_eq!(before, after);
}

#[tokio::test]
async fn display_fetch_increments_exactly_once_per_call() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    let first = posts
        .fetch_for_display("nextjs-15-new-features")
        .await
        .unwrap();
    assert_eq!(first.post.view_count, 1251);

    let second = posts
        .fetch_for_display("nextjs-15-new-features")
        .await
        .unwrap();
    assert_eq!(second.post.view_count, 1252);
}

#[tokio::test]
async fn display_fetch_counts_draft_views_too() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    let view = posts
        .fetch_for_display("modern-css-techniques")
        .await
        .unwrap();
    assert!(!view.post.published);
    assert_eq!(view.post.view_count, 1);
}

#[tokio::test]
async fn display_fetch_of_unknown_slug_is_none() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;
    assert!(posts.fetch_for_display("no-such-post").await.is_none());
}

#[tokio::test]
async fn views_resolve_author_and_category() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    let view = posts.find_by_slug("nextjs-15-new-features").await.unwrap();
    assert_eq!(view.author.unwrap().name, "Alice Chen");
    assert_eq!(view.category.unwrap().slug, "nextjs");
}

#[tokio::test]
async fn dangling_references_resolve_to_none() {
    let store = MemoryContentStore::with_data(SeedData {
        posts: vec![standalone_post("orphaned", true, 7)],
        ..Default::default()
    });
    let posts: &dyn PostStore = &store;

    let view = posts.find_by_slug("orphaned").await.unwrap();
    assert!(view.author.is_none());
    assert!(view.category.is_none());
}

#[tokio::test]
async fn category_and_tag_reads_exclude_drafts() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;
    let categories: &dyn CategoryStore = &store;

    // The draft in the css category must not appear in either read.
    let css = categories.find_by_slug("css").await.unwrap();
    assert_eq!(
        slugs(&posts.by_category(css.id).await),
        ["css-in-js-to-css-modules-migration"]
    );
    assert_eq!(
        slugs(&posts.by_tag("CSS").await),
        ["css-in-js-to-css-modules-migration"]
    );
}

#[tokio::test]
async fn tag_reads_are_case_sensitive() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;
    assert!(posts.by_tag("css").await.is_empty());
}

#[tokio::test]
async fn author_reads_list_published_posts_in_insertion_order() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;
    let users: &dyn UserStore = &store;

    let alice = users
        .all()
        .await
        .into_iter()
        .find(|user| user.name == "Alice Chen")
        .unwrap();
    assert_eq!(
        slugs(&posts.by_author(alice.id).await),
        ["nextjs-15-new-features", "nextjs-beginner-complete-guide"]
    );
}

#[tokio::test]
async fn search_scans_all_text_fields_case_insensitively() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    // Title and tag hit.
    assert_eq!(
        slugs(&posts.search("TYPESCRIPT").await),
        ["typescript-react-development"]
    );
    // Excerpt hit.
    assert_eq!(
        slugs(&posts.search("deployed site").await),
        ["nextjs-beginner-complete-guide"]
    );
    // Content hit living only in the draft stays hidden.
    assert!(posts.search("container queries").await.is_empty());
}

#[tokio::test]
async fn popular_and_recent_are_capped_and_ordered() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    assert_eq!(
        slugs(&posts.popular(2).await),
        ["nextjs-beginner-complete-guide", "nextjs-15-new-features"]
    );
    assert_eq!(
        slugs(&posts.recent(3).await),
        [
            "nextjs-15-new-features",
            "react-server-components-guide",
            "typescript-react-development",
        ]
    );
}

#[tokio::test]
async fn default_query_is_published_newest_first() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    let result = posts.query(&PostQuery::default()).await;
    assert_eq!(slugs(&result), slugs(&posts.published().await));
}

#[tokio::test]
async fn query_filters_by_category_slug() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    let result = posts
        .query(&PostQuery {
            category: Some("tutorial".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(slugs(&result), ["nextjs-beginner-complete-guide"]);
}

#[tokio::test]
async fn unknown_category_slug_leaves_listing_unfiltered() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    let result = posts
        .query(&PostQuery {
            category: Some("no-such-section".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(result.len(), 5);
}

#[tokio::test]
async fn query_combines_filters_with_and() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    let result = posts
        .query(&PostQuery {
            category: Some("tutorial".to_string()),
            tag: Some("Beginner".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(slugs(&result), ["nextjs-beginner-complete-guide"]);

    // Both of these filters match posts on their own; their intersection
    // must come back empty rather than erroring.
    let none = posts
        .query(&PostQuery {
            category: Some("nextjs".to_string()),
            tag: Some("Beginner".to_string()),
            ..Default::default()
        })
        .await;
    assert!(none.is_empty());
}

#[tokio::test]
async fn query_sorts_by_view_count_in_both_directions() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    let asc = posts
        .query(&PostQuery {
            sort_by: SortKey::ViewCount,
            sort_order: SortOrder::Asc,
            ..Default::default()
        })
        .await;
    assert_eq!(
        slugs(&asc),
        [
            "css-in-js-to-css-modules-migration",
            "typescript-react-development",
            "react-server-components-guide",
            "nextjs-15-new-features",
            "nextjs-beginner-complete-guide",
        ]
    );

    let desc = posts
        .query(&PostQuery {
            sort_by: SortKey::ViewCount,
            sort_order: SortOrder::Desc,
            ..Default::default()
        })
        .await;
    let mut reversed = slugs(&desc);
    reversed.reverse();
    assert_eq!(slugs(&asc), reversed);
}

#[tokio::test]
async fn query_sorts_by_title_lexicographically() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    let result = posts
        .query(&PostQuery {
            sort_by: SortKey::Title,
            sort_order: SortOrder::Asc,
            ..Default::default()
        })
        .await;
    assert_eq!(
        slugs(&result),
        [
            "nextjs-15-new-features",
            "css-in-js-to-css-modules-migration",
            "react-server-components-guide",
            "nextjs-beginner-complete-guide",
            "typescript-react-development",
        ]
    );
}

#[tokio::test]
async fn query_sort_preserves_insertion_order_on_ties() {
    let store = MemoryContentStore::new();
    let posts: &dyn PostStore = &store;
    for title in ["First Note", "Second Note", "Third Note"] {
        posts.create(new_post(title, true)).await.unwrap();
    }

    // All three share view_count 0; descending order must not reshuffle.
    let result = posts
        .query(&PostQuery {
            sort_by: SortKey::ViewCount,
            sort_order: SortOrder::Desc,
            ..Default::default()
        })
        .await;
    assert_eq!(slugs(&result), ["first-note", "second-note", "third-note"]);
}

#[tokio::test]
async fn tags_are_distinct_sorted_and_published_only() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    // "Design" only appears on the draft, so it stays out.
    assert_eq!(
        posts.tags().await,
        [
            "Beginner",
            "CSS",
            "Frontend",
            "Next.js",
            "React",
            "Server Components",
            "TypeScript",
        ]
    );
}

#[tokio::test]
async fn facets_report_the_whole_universe() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;

    let facets = posts.facets().await;
    assert_eq!(facets.categories.len(), 5);
    assert_eq!(facets.tags.len(), 7);
    // Three authors, each deduplicated across their posts.
    assert_eq!(facets.authors.len(), 3);
}

#[tokio::test]
async fn facets_exclude_authors_without_published_posts() {
    let store = MemoryContentStore::new();
    let posts: &dyn PostStore = &store;
    let users: &dyn UserStore = &store;

    let author = users
        .create(NewUser {
            name: "Lurker".to_string(),
            email: "lurker@example.com".to_string(),
            avatar: None,
            bio: None,
        })
        .await
        .unwrap();
    let mut draft = new_post("Unfinished", false);
    draft.author_id = author.id;
    posts.create(draft).await.unwrap();

    assert!(posts.facets().await.authors.is_empty());
}

#[tokio::test]
async fn comments_list_oldest_first_with_reply_links() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;
    let comments: &dyn CommentStore = &store;

    let post = posts.find_by_slug("nextjs-15-new-features").await.unwrap();
    let thread = comments.for_post(post.post.id).await;
    assert_eq!(thread.len(), 2);
    assert!(thread[0].created_at <= thread[1].created_at);
    assert_eq!(thread[1].parent_id, Some(thread[0].id));

    assert!(comments.for_post(Uuid::new_v4()).await.is_empty());
}

#[tokio::test]
async fn comment_creation_tolerates_unknown_posts() {
    let store = MemoryContentStore::new();
    let comments: &dyn CommentStore = &store;

    let ghost = Uuid::new_v4();
    let comment = comments
        .create(NewComment {
            content: "Looking forward to this one.".to_string(),
            author_name: "Haru Ito".to_string(),
            author_email: "haru@example.com".to_string(),
            post_id: ghost,
            parent_id: None,
        })
        .await
        .unwrap();
    assert_eq!(comment.post_id, ghost);
    assert_eq!(comments.for_post(ghost).await.len(), 1);
}

#[tokio::test]
async fn user_lifecycle_roundtrip() {
    let store = MemoryContentStore::new();
    let users: &dyn UserStore = &store;

    let created = users
        .create(NewUser {
            name: "Nia Park".to_string(),
            email: "nia@example.com".to_string(),
            avatar: None,
            bio: None,
        })
        .await
        .unwrap();
    assert_eq!(users.get(created.id).await.unwrap().name, "Nia Park");

    let updated = users
        .update(
            created.id,
            UserPatch {
                bio: Some("Editor".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.bio.as_deref(), Some("Editor"));
    assert_eq!(updated.name, "Nia Park");

    assert!(users.delete(created.id).await);
    assert!(!users.delete(created.id).await);
    assert!(users.get(created.id).await.is_none());
}

#[tokio::test]
async fn user_update_of_unknown_id_is_not_found() {
    let store = MemoryContentStore::new();
    let users: &dyn UserStore = &store;

    let err = users
        .update(Uuid::new_v4(), UserPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "user", .. }));
}

#[tokio::test]
async fn deleting_an_author_leaves_their_posts_unresolved() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;
    let users: &dyn UserStore = &store;

    let alice = users
        .all()
        .await
        .into_iter()
        .find(|user| user.name == "Alice Chen")
        .unwrap();
    assert!(users.delete(alice.id).await);

    let view = posts.find_by_slug("nextjs-15-new-features").await.unwrap();
    assert!(view.author.is_none());
    assert_eq!(posts.published().await.len(), 5);
}

#[tokio::test]
async fn stats_summarize_the_demo_universe() {
    let store = MemoryContentStore::demo();
    let stats: &dyn StatsSource = &store;

    let summary = stats.stats().await;
    assert_eq!(summary.total_posts, 5);
    assert_eq!(summary.total_users, 3);
    assert_eq!(summary.total_categories, 5);
    assert_eq!(summary.total_views, 5347);
    assert_eq!(
        slugs(&summary.popular_posts),
        [
            "nextjs-beginner-complete-guide",
            "nextjs-15-new-features",
            "react-server-components-guide",
        ]
    );
    assert_eq!(
        slugs(&summary.recent_posts),
        [
            "nextjs-15-new-features",
            "react-server-components-guide",
            "typescript-react-development",
        ]
    );
}

#[tokio::test]
async fn stats_count_draft_views_but_not_draft_posts() {
    let store = MemoryContentStore::with_data(SeedData {
        posts: vec![standalone_post("quiet-draft", false, 50)],
        ..Default::default()
    });
    let stats: &dyn StatsSource = &store;

    let summary = stats.stats().await;
    assert_eq!(summary.total_posts, 0);
    assert_eq!(summary.total_views, 50);
    assert!(summary.popular_posts.is_empty());
    assert!(summary.recent_posts.is_empty());
}

#[tokio::test]
async fn stats_are_recomputed_on_every_read() {
    let store = MemoryContentStore::demo();
    let posts: &dyn PostStore = &store;
    let stats: &dyn StatsSource = &store;

    let before = stats.stats().await;
    posts
        .fetch_for_display("nextjs-15-new-features")
        .await
        .unwrap();
    posts.create(new_post("Fresh Angle", true)).await.unwrap();

    let after = stats.stats().await;
    assert_eq!(after.total_posts, before.total_posts + 1);
    assert_eq!(after.total_views, before.total_views + 1);
}

#[tokio::test]
async fn concurrent_display_fetches_do_not_lose_counts() {
    let store = Arc::new(MemoryContentStore::demo());

    let mut handles = Vec::new();
    for _ in 0..20 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let posts: &dyn PostStore = store.as_ref();
            posts.fetch_for_display("nextjs-15-new-features").await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let posts: &dyn PostStore = store.as_ref();
    let view = posts.find_by_slug("nextjs-15-new-features").await.unwrap();
    assert_eq!(view.post.view_count, 1270);
}
