use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostsQuery {
    user_id: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentsQuery {
    post_id: Option<u64>,
}

/// In-memory backend data. Comment ids are assigned on creation, one past
/// the highest id ever handed out.
#[derive(Clone, Debug)]
pub struct Store {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    next_comment_id: u64,
}

impl Store {
    pub fn new(users: Vec<User>, posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        let next_comment_id = comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            users,
            posts,
            comments,
            next_comment_id,
        }
    }

    /// Three authors; the third has no posts.
    pub fn seeded() -> Self {
        let user = |id: u64, name: &str, username: &str| User {
            id,
            name: name.to_string(),
            username: username.to_string(),
            email: format!("{}@example.com", username.to_lowercase()),
            phone: "1-770-736-8031".to_string(),
            website: format!("{}.example.org", username.to_lowercase()),
        };
        let post = |id: u64, user_id: u64, title: &str, body: &str| Post {
            id,
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        };
        let comment = |id: u64, post_id: u64, name: &str, body: &str| Comment {
            id,
            post_id,
            name: name.to_string(),
            email: format!("{}@example.net", name.split(' ').next().unwrap_or(name).to_lowercase()),
            body: body.to_string(),
        };

        Self::new(
            vec![
                user(1, "Leanne Graham", "Bret"),
                user(2, "Ervin Howell", "Antonette"),
                user(3, "Clementine Bauch", "Samantha"),
            ],
            vec![
                post(1, 1, "sunt aut facere repellat", "quia et suscipit recusandae"),
                post(2, 1, "qui est esse", "est rerum tempore vitae sequi"),
                post(3, 2, "ea molestias quasi", "et iusto sed quo iure"),
            ],
            vec![
                comment(1, 1, "Eliseo Leannon", "laudantium enim quasi est"),
                comment(2, 1, "Jayne Kuhic", "est natus enim nihil"),
                comment(3, 2, "Nikita Breitenberg", "quia molestiae reprehenderit"),
            ],
        )
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/users", get(list_users))
        .route("/posts", get(list_posts))
        .route("/comments", get(list_comments).post(create_comment))
        .route("/comments/{id}", delete(delete_comment))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    Json(db.read().await.users.clone())
}

async fn list_posts(State(db): State<Db>, Query(query): Query<PostsQuery>) -> Json<Vec<Post>> {
    let store = db.read().await;
    let posts = store
        .posts
        .iter()
        .filter(|p| query.user_id.map_or(true, |id| p.user_id == id))
        .cloned()
        .collect();
    Json(posts)
}

async fn list_comments(State(db): State<Db>, Query(query): Query<CommentsQuery>) -> Json<Vec<Comment>> {
    let store = db.read().await;
    let comments = store
        .comments
        .iter()
        .filter(|c| query.post_id.map_or(true, |id| c.post_id == id))
        .cloned()
        .collect();
    Json(comments)
}

async fn create_comment(
    State(db): State<Db>,
    Json(input): Json<CreateComment>,
) -> (StatusCode, Json<Comment>) {
    let mut store = db.write().await;
    let comment = Comment {
        id: store.next_comment_id,
        post_id: input.post_id,
        name: input.name,
        email: input.email,
        body: input.body,
    };
    store.next_comment_id += 1;
    store.comments.push(comment.clone());
    debug!("created comment {} on post {}", comment.id, comment.post_id);
    (StatusCode::CREATED, Json(comment))
}

async fn delete_comment(State(db): State<Db>, Path(id): Path<u64>) -> StatusCode {
    let mut store = db.write().await;
    let before = store.comments.len();
    store.comments.retain(|c| c.id != id);
    if store.comments.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}
