//! Demo content - a small deterministic universe for the demo server and
//! the test suite.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use gazette_core::domain::{Category, Comment, Post, User};

/// A complete content universe for preloading a store.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("valid demo timestamp")
}

fn user(name: &str, email: &str, bio: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: Some(format!(
            "https://ui-avatars.com/api/?name={}",
            name.replace(' ', "+")
        )),
        bio: Some(bio.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    title: &str,
    slug: &str,
    excerpt: &str,
    content: &str,
    author: &User,
    category: &Category,
    tags: &[&str],
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    view_count: u64,
) -> Post {
    Post {
        id: Uuid::new_v4(),
        title: title.to_string(),
        slug: slug.to_string(),
        content: content.to_string(),
        excerpt: excerpt.to_string(),
        cover_image: None,
        author_id: author.id,
        category_id: category.id,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        published: published_at.is_some(),
        published_at,
        created_at,
        updated_at: published_at.unwrap_or(created_at),
        view_count,
    }
}

fn comment(
    content: &str,
    author_name: &str,
    author_email: &str,
    post: &Post,
    parent_id: Option<Uuid>,
    created_at: DateTime<Utc>,
) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        content: content.to_string(),
        author_name: author_name.to_string(),
        author_email: author_email.to_string(),
        post_id: post.id,
        parent_id,
        created_at,
        updated_at: created_at,
    }
}

/// The demo universe: three authors, five categories, six posts (one of
/// them still a draft) and a handful of comments.
pub fn demo_content() -> SeedData {
    let alice = user(
        "Alice Chen",
        "alice@example.com",
        "Full-stack engineer writing about React and the wider ecosystem.",
    );
    let ben = user(
        "Ben Rivera",
        "ben@example.com",
        "UI engineer with a soft spot for build tooling.",
    );
    let chloe = user(
        "Chloe Watts",
        "chloe@example.com",
        "Technical writer covering styling and type systems.",
    );

    let nextjs = Category::new(
        "Next.js",
        "nextjs",
        Some("App router, rendering strategies and deployment"),
        "#000000",
    );
    let react = Category::new(
        "React",
        "react",
        Some("Components, hooks and everything in between"),
        "#61DAFB",
    );
    let typescript = Category::new(
        "TypeScript",
        "typescript",
        Some("Types that carry their weight"),
        "#3178C6",
    );
    let css = Category::new(
        "CSS",
        "css",
        Some("Layout, styling architecture and design systems"),
        "#1572B6",
    );
    let tutorials = Category::new(
        "Tutorials",
        "tutorial",
        Some("Step-by-step guides you can follow along"),
        "#FF6B6B",
    );

    let everything_new = post(
        "Everything New in Next.js 15",
        "nextjs-15-new-features",
        "A tour through the headline changes in the latest major release.",
        "## The headline changes\n\nThe new release lands a stable app router story, \
         faster local compilation and a reworked caching model. This post walks \
         through each change with migration notes from a real project.\n\n\
         Upgrading is mostly mechanical, but the caching defaults deserve a \
         careful read before you ship.",
        &alice,
        &nextjs,
        &["Next.js", "React", "Frontend"],
        ts(2024, 1, 12, 9, 0),
        Some(ts(2024, 1, 15, 10, 0)),
        1250,
    );

    let server_components = post(
        "React Server Components in Practice",
        "react-server-components-guide",
        "What actually changes in your architecture when components render on the server.",
        "Server components move data fetching next to the markup it feeds. That \
         sounds small and changes almost everything about how you slice an app.\n\n\
         This guide covers the serialization boundary, streaming, and the \
         patterns that survived contact with production.",
        &ben,
        &react,
        &["React", "Server Components"],
        ts(2024, 1, 7, 13, 30),
        Some(ts(2024, 1, 10, 9, 30)),
        890,
    );

    let ts_patterns = post(
        "TypeScript Patterns for React Apps",
        "typescript-react-development",
        "Typing props, hooks and context without drowning in generics.",
        "Strict mode pays for itself the first time a refactor touches twenty \
         files. Here are the prop and hook typing patterns we reach for, and the \
         ones we stopped using.\n\nDiscriminated unions for component state, \
         generics only at the edges, and inference everywhere else.",
        &chloe,
        &typescript,
        &["TypeScript", "React"],
        ts(2024, 1, 6, 8, 0),
        Some(ts(2024, 1, 8, 14, 0)),
        675,
    );

    let css_migration = post(
        "Migrating from CSS-in-JS to CSS Modules",
        "css-in-js-to-css-modules-migration",
        "Notes from moving a mid-sized app off runtime styling.",
        "Runtime styling cost us real milliseconds on every render. We moved to \
         CSS Modules over six weeks without a visual regression.\n\nThe write-up \
         covers codemods, theming without a ThemeProvider, and what we kept from \
         the old setup.",
        &chloe,
        &css,
        &["CSS", "React"],
        ts(2024, 1, 4, 10, 15),
        Some(ts(2024, 1, 5, 11, 0)),
        432,
    );

    let beginner_guide = post(
        "The Complete Next.js Beginner Guide",
        "nextjs-beginner-complete-guide",
        "From an empty directory to a deployed site, one concept at a time.",
        "Start with pages, add data fetching, then layer on routing and \
         deployment. Every step in this guide produces something you can run.\n\n\
         No prior framework experience assumed; basic React knowledge helps but \
         each concept gets a short refresher.",
        &alice,
        &tutorials,
        &["Next.js", "Beginner"],
        ts(2024, 1, 2, 7, 45),
        Some(ts(2024, 1, 3, 8, 0)),
        2100,
    );

    let css_layouts = post(
        "Modern CSS Layout Techniques",
        "modern-css-techniques",
        "Grid, container queries and the end of breakpoint soup.",
        "Draft in progress. Container queries finally let components own their \
         layout decisions; this post collects the patterns as they stabilise.",
        &ben,
        &css,
        &["CSS", "Design"],
        ts(2024, 1, 20, 16, 0),
        None,
        0,
    );

    let first = comment(
        "Great overview, the caching section saved me a day of debugging.",
        "Dana Wells",
        "dana@example.com",
        &everything_new,
        None,
        ts(2024, 1, 16, 10, 0),
    );
    let reply = comment(
        "Same here. The migration notes matched exactly what we hit in production.",
        "Eli Navarro",
        "eli@example.com",
        &everything_new,
        Some(first.id),
        ts(2024, 1, 16, 12, 30),
    );
    let second_post_comment = comment(
        "Would love a follow-up on error handling across the boundary.",
        "Farah Aziz",
        "farah@example.com",
        &server_components,
        None,
        ts(2024, 1, 11, 9, 15),
    );
    let guide_comment = comment(
        "Finished the whole guide in a weekend. The pacing is perfect.",
        "Gus Peterson",
        "gus@example.com",
        &beginner_guide,
        None,
        ts(2024, 1, 9, 18, 45),
    );

    SeedData {
        users: vec![alice, ben, chloe],
        categories: vec![nextjs, react, typescript, css, tutorials],
        posts: vec![
            everything_new,
            server_components,
            ts_patterns,
            css_migration,
            beginner_guide,
            css_layouts,
        ],
        comments: vec![first, reply, second_post_comment, guide_comment],
    }
}
