use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::net::TcpListener;

/// State behind the fake content API
#[derive(Default)]
pub struct ContentApiState {
    pub articles: Vec<Value>,
    pub blogs: Vec<Value>,
    pub interests: Vec<Value>,
    /// Collections ("articles", "blogs", "interests") that answer 500
    pub failing: HashSet<&'static str>,
    pub deleted: Vec<String>,
    pub authorization_headers: Vec<Option<String>>,
    pub requests: usize,
}

#[derive(Clone)]
pub struct FakeContentApi {
    pub base_url: String,
    state: Arc<Mutex<ContentApiState>>,
}

impl FakeContentApi {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(ContentApiState::default()));

        let app = Router::new()
            .route("/articles", get(list_articles))
            .route("/blogs", get(list_blogs))
            .route("/interests", get(list_interests))
            .route("/articles/user/:userId", get(list_articles_by_user))
            .route("/blogs/user/:userId", get(list_blogs_by_user))
            .route("/articles/:id", delete(delete_article))
            .route("/blogs/:id", delete(delete_blog))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake content API");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn add_interest(&self, interest: Value) {
        self.state.lock().interests.push(interest);
    }

    pub fn add_article(&self, article: Value) {
        self.state.lock().articles.push(article);
    }

    pub fn add_blog(&self, blog: Value) {
        self.state.lock().blogs.push(blog);
    }

    pub fn fail(&self, collection: &'static str) {
        self.state.lock().failing.insert(collection);
    }

    pub fn deleted(&self) -> Vec<String> {
        self.state.lock().deleted.clone()
    }

    pub fn authorization_headers(&self) -> Vec<Option<String>> {
        self.state.lock().authorization_headers.clone()
    }

    #[allow(dead_code)]
    pub fn request_count(&self) -> usize {
        self.state.lock().requests
    }
}

type SharedState = State<Arc<Mutex<ContentApiState>>>;

fn record(state: &mut ContentApiState, headers: &HeaderMap) {
    state.requests += 1;
    state.authorization_headers.push(
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
}

fn collection(state: &ContentApiState, name: &'static str) -> Response {
    if state.failing.contains(name) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "database unavailable" })),
        )
            .into_response();
    }

    let items = match name {
        "articles" => &state.articles,
        "blogs" => &state.blogs,
        _ => &state.interests,
    };
    Json(items.clone()).into_response()
}

fn by_author(state: &ContentApiState, name: &'static str, user_id: &str) -> Response {
    if state.failing.contains(name) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let items = if name == "articles" {
        &state.articles
    } else {
        &state.blogs
    };
    let owned: Vec<Value> = items
        .iter()
        .filter(|item| item["author"]["_id"].as_str() == Some(user_id))
        .cloned()
        .collect();
    Json(owned).into_response()
}

fn remove(state: &mut ContentApiState, name: &'static str, id: &str) -> StatusCode {
    let items = if name == "articles" {
        &mut state.articles
    } else {
        &mut state.blogs
    };
    let before = items.len();
    items.retain(|item| item["_id"].as_str() != Some(id));
    if items.len() == before {
        return StatusCode::NOT_FOUND;
    }

    let kind = name.trim_end_matches('s');
    state.deleted.push(format!("{}-{}", kind, id));
    StatusCode::OK
}

async fn list_articles(State(state): SharedState, headers: HeaderMap) -> Response {
    let mut state = state.lock();
    record(&mut state, &headers);
    collection(&state, "articles")
}

async fn list_blogs(State(state): SharedState, headers: HeaderMap) -> Response {
    let mut state = state.lock();
    record(&mut state, &headers);
    collection(&state, "blogs")
}

async fn list_interests(State(state): SharedState, headers: HeaderMap) -> Response {
    let mut state = state.lock();
    record(&mut state, &headers);
    collection(&state, "interests")
}

async fn list_articles_by_user(
    State(state): SharedState,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.lock();
    record(&mut state, &headers);
    by_author(&state, "articles", &user_id)
}

async fn list_blogs_by_user(
    State(state): SharedState,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.lock();
    record(&mut state, &headers);
    by_author(&state, "blogs", &user_id)
}

async fn delete_article(
    State(state): SharedState,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StatusCode {
    let mut state = state.lock();
    record(&mut state, &headers);
    remove(&mut state, "articles", &id)
}

async fn delete_blog(
    State(state): SharedState,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StatusCode {
    let mut state = state.lock();
    record(&mut state, &headers);
    remove(&mut state, "blogs", &id)
}
