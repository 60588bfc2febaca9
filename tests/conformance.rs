//! End-to-end conformance scenarios driven through the public facade.
//!
//! These tests play the role of the external harness: construct both
//! stores from seed data and a current-user id, then exercise every
//! operation of the public contract.

use gramstore::{
    PostId, PostRecord, PostView, PostsStore, StoreError, UserId, UserRecord, UserView, UsersStore,
};

fn user(id: u64, username: &str, full_name: &str) -> UserRecord {
    UserRecord {
        id: UserId::new(id),
        username: username.to_string(),
        full_name: full_name.to_string(),
        avatar_url: None,
    }
}

fn post(id: u64, author: u64, description: &str) -> PostRecord {
    PostRecord {
        id: PostId::new(id),
        author: UserId::new(author),
        description: description.to_string(),
        image_url: format!("https://cdn.example/{id}.jpg"),
        created_time: "2017-09-01T12:00:00Z".parse().unwrap(),
    }
}

#[test]
fn follow_scenario() {
    let mut users = UsersStore::new(
        vec![user(1, "ada", "Ada Lovelace"), user(2, "grace", "Grace Hopper")],
        vec![],
        UserId::new(1),
    )
    .unwrap();

    // Handles obtained before any mutation.
    let me = users.user(UserId::new(1)).unwrap();
    let grace = users.user(UserId::new(2)).unwrap();

    assert!(users.follow(UserId::new(2)));
    assert_eq!(me.follows_count(), 1);
    assert_eq!(grace.followed_by_count(), 1);

    let followers = users.users_following(UserId::new(2)).unwrap();
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].id(), UserId::new(1));

    // Second follow: success, no count change.
    assert!(users.follow(UserId::new(2)));
    assert_eq!(me.follows_count(), 1);
    assert_eq!(grace.followed_by_count(), 1);

    // Unfollow restores the counts.
    assert!(users.unfollow(UserId::new(2)));
    assert_eq!(me.follows_count(), 0);
    assert_eq!(grace.followed_by_count(), 0);
    assert!(!grace.followed_by_current_user());
}

#[test]
fn like_scenario() {
    // Current user 5 authored no posts; posts need no anchor.
    let mut posts = PostsStore::new(vec![post(10, 1, "hello world")], vec![], UserId::new(5))
        .unwrap();

    assert!(posts.like_post(PostId::new(10)));
    let liked = posts.post(PostId::new(10)).unwrap();
    assert_eq!(liked.liked_by_count(), 1);
    assert!(liked.liked_by_current_user());

    // Unknown post: failure, no state change.
    assert!(!posts.like_post(PostId::new(99)));
    assert_eq!(liked.liked_by_count(), 1);

    let found = posts.find_posts_by_text("hello");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), PostId::new(10));
    assert!(posts.find_posts_by_text("zzz").is_empty());

    assert_eq!(
        posts.users_liked_post(PostId::new(10)).unwrap(),
        vec![UserId::new(5)]
    );
}

#[test]
fn users_store_requires_anchor() {
    let err = UsersStore::new(vec![user(2, "grace", "Grace Hopper")], vec![], UserId::new(1))
        .unwrap_err();
    assert_eq!(err, StoreError::CurrentUserMissing { id: UserId::new(1) });
}

#[test]
fn query_symmetry_across_a_mixed_table() {
    let users_seed = vec![
        user(1, "ada", "Ada Lovelace"),
        user(2, "grace", "Grace Hopper"),
        user(3, "edsger", "Edsger Dijkstra"),
        user(4, "barbara", "Barbara Liskov"),
    ];
    let table = vec![
        (UserId::new(2), UserId::new(1)),
        (UserId::new(3), UserId::new(1)),
        (UserId::new(3), UserId::new(4)),
        (UserId::new(4), UserId::new(2)),
    ];
    let mut users = UsersStore::new(users_seed, table, UserId::new(1)).unwrap();
    users.follow(UserId::new(3));

    for u in [1u64, 2, 3, 4].map(UserId::new) {
        for v in users.users_followed_by(u).unwrap() {
            let back = users.users_following(v.id()).unwrap();
            assert!(
                back.iter().any(|w| w.id() == u),
                "{u} follows {} but is missing from its follower list",
                v.id()
            );
        }
    }
}

#[test]
fn cross_store_ids_flow_between_stores_unvalidated() {
    let mut users = UsersStore::new(
        vec![user(1, "ada", "Ada Lovelace"), user(2, "grace", "Grace Hopper")],
        vec![],
        UserId::new(1),
    )
    .unwrap();
    let mut posts = PostsStore::new(
        // Author 9 exists in no users store; kept verbatim.
        vec![post(10, 2, "hello"), post(11, 9, "sunset")],
        vec![],
        UserId::new(1),
    )
    .unwrap();

    users.follow(UserId::new(2));
    posts.like_post(PostId::new(11));

    // The posts store answers author queries without consulting users.
    assert_eq!(posts.find_posts_by_author(UserId::new(9)).len(), 1);

    // users_liked_post returns raw ids; resolving them is the caller's
    // business, via the users store.
    let likers = posts.users_liked_post(PostId::new(11)).unwrap();
    assert_eq!(likers, vec![UserId::new(1)]);
    let resolved = users.user(likers[0]).unwrap();
    assert_eq!(resolved.username(), "ada");
}

#[test]
fn seed_records_load_from_json() {
    let users_json = r#"[
        {"id": 1, "username": "ada", "full_name": "Ada Lovelace"},
        {"id": 2, "username": "grace", "full_name": "Grace Hopper",
         "avatar_url": "https://cdn.example/grace.png"}
    ]"#;
    let posts_json = r#"[
        {"id": 10, "author": 2, "description": "hello world",
         "image_url": "https://cdn.example/10.jpg",
         "created_time": "2017-09-01T12:00:00Z"}
    ]"#;

    let user_seeds: Vec<UserRecord> = serde_json::from_str(users_json).unwrap();
    let post_seeds: Vec<PostRecord> = serde_json::from_str(posts_json).unwrap();

    let users = UsersStore::new(user_seeds, vec![], UserId::new(1)).unwrap();
    let posts = PostsStore::new(post_seeds, vec![], UserId::new(1)).unwrap();

    assert_eq!(users.count(), 2);
    assert_eq!(posts.count(), 1);
    assert_eq!(
        users.user(UserId::new(2)).unwrap().avatar_url().as_deref(),
        Some("https://cdn.example/grace.png")
    );
    assert_eq!(posts.post(PostId::new(10)).unwrap().author(), UserId::new(2));
}
