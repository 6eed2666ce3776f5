mod support;

use resdev_core::application::commands::blogs::{
    CreateBlogCommand, EditBlogCommand, SetPublishStateCommand,
};
use resdev_core::application::error::ApplicationError;
use resdev_core::application::queries::blogs::GetOwnedBlogQuery;
use resdev_core::domain::errors::DomainError;
use support::{BlogBuilder, TestApp, actor};

fn edit(id: i64) -> EditBlogCommand {
    EditBlogCommand {
        id,
        title: None,
        summary: None,
        content: None,
        cover_url: None,
    }
}

fn is_blog_not_found(err: &ApplicationError) -> bool {
    matches!(err, ApplicationError::NotFound(msg) if msg == "blog not found")
}

#[tokio::test]
async fn new_blogs_start_unpublished() {
    let app = TestApp::new();
    let command = CreateBlogCommand {
        title: "Hello".into(),
        summary: String::new(),
        content: "body".into(),
        cover_url: Some("https://cdn.example.com/c.png".into()),
    };

    let created = app
        .services
        .blog_commands
        .create_blog(&actor(1), command)
        .await
        .unwrap();

    assert!(!created.published);
    assert_eq!(created.author_id, 1);
    assert_eq!(created.created_at, created.updated_at);
    let stored = app.blogs.get(created.id).unwrap();
    assert!(!stored.published);
    assert_eq!(stored.cover_url.as_deref(), Some("https://cdn.example.com/c.png"));
}

#[tokio::test]
async fn publishing_twice_is_idempotent() {
    let app = TestApp::new();
    app.blogs.put(BlogBuilder::new(1).build());
    let owner = actor(1);

    let first = app.services.blog_commands.publish_blog(&owner, 1).await.unwrap();
    let second = app.services.blog_commands.publish_blog(&owner, 1).await.unwrap();

    assert!(first.published);
    assert!(second.published);
    assert_eq!(first.updated_at, second.updated_at);
    assert_eq!(app.blogs.saves(), 1);
    assert!(app.blogs.get(1).unwrap().published);
}

#[tokio::test]
async fn unpublish_returns_the_blog_to_draft() {
    let app = TestApp::new();
    app.blogs.put(BlogBuilder::new(1).published().aged(60).build());

    let blog = app
        .services
        .blog_commands
        .set_publish_state(&actor(1), SetPublishStateCommand { id: 1, publish: false })
        .await
        .unwrap();

    assert!(!blog.published);
    assert!(blog.updated_at > blog.created_at);
    assert!(!app.blogs.get(1).unwrap().published);

    app.services
        .blog_commands
        .unpublish_blog(&actor(1), 1)
        .await
        .unwrap();
    assert_eq!(app.blogs.saves(), 1);
}

#[tokio::test]
async fn strangers_get_not_found_and_change_nothing() {
    let app = TestApp::new();
    app.blogs.put(BlogBuilder::new(1).content("mine").build());
    let before = app.blogs.get(1).unwrap();
    let stranger = actor(2);
    let commands = &app.services.blog_commands;

    let err = commands.publish_blog(&stranger, 1).await.unwrap_err();
    assert!(is_blog_not_found(&err));

    let err = commands.unpublish_blog(&stranger, 1).await.unwrap_err();
    assert!(is_blog_not_found(&err));

    let mut change = edit(1);
    change.content = Some("defaced".into());
    let err = commands.edit_blog(&stranger, change).await.unwrap_err();
    assert!(is_blog_not_found(&err));

    let err = app
        .services
        .blog_queries
        .get_owned_blog(&stranger, GetOwnedBlogQuery { id: 1 })
        .await
        .unwrap_err();
    assert!(is_blog_not_found(&err));

    assert_eq!(app.blogs.get(1).unwrap(), before);
    assert_eq!(app.blogs.saves(), 0);
}

#[tokio::test]
async fn denial_and_absence_look_the_same() {
    let app = TestApp::new();
    app.blogs.put(BlogBuilder::new(1).author(2).build());
    let caller = actor(1);

    let denied = app.services.blog_commands.publish_blog(&caller, 1).await.unwrap_err();
    let absent = app.services.blog_commands.publish_blog(&caller, 77).await.unwrap_err();

    assert_eq!(denied.to_string(), absent.to_string());
}

#[tokio::test]
async fn edit_changes_only_what_was_sent() {
    let app = TestApp::new();
    app.blogs.put(
        BlogBuilder::new(1)
            .title("Old")
            .content("old body")
            .published()
            .build(),
    );
    let mut command = edit(1);
    command.title = Some("New".into());
    command.cover_url = Some(Some("https://cdn.example.com/x.png".into()));

    let updated = app
        .services
        .blog_commands
        .edit_blog(&actor(1), command)
        .await
        .unwrap();

    assert_eq!(updated.title, "New");
    assert_eq!(updated.content, "old body");
    assert_eq!(updated.cover_url.as_deref(), Some("https://cdn.example.com/x.png"));
    assert!(updated.published);
    assert_eq!(updated.author_id, 1);
    assert!(updated.updated_at >= updated.created_at);

    let mut clear = edit(1);
    clear.cover_url = Some(None);
    let cleared = app
        .services
        .blog_commands
        .edit_blog(&actor(1), clear)
        .await
        .unwrap();
    assert_eq!(cleared.cover_url, None);
    assert_eq!(app.blogs.get(1).unwrap().cover_url, None);
}

#[tokio::test]
async fn empty_edit_is_a_validation_error() {
    let app = TestApp::new();
    app.blogs.put(BlogBuilder::new(1).build());

    let err = app
        .services
        .blog_commands
        .edit_blog(&actor(1), edit(1))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
    assert_eq!(app.blogs.saves(), 0);
}

#[tokio::test]
async fn non_positive_ids_are_rejected_before_lookup() {
    let app = TestApp::new();

    let err = app
        .services
        .blog_commands
        .publish_blog(&actor(1), 0)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}
