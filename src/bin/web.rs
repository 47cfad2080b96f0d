//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use rps_showdown_web::{GameId, GameSession, Move, ResetMode, Rosters};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-game entry: session data + last activity time (for auto-cleanup).
struct GameEntry {
    session: GameSession,
    last_activity: Instant,
}

/// In-memory state: many games by ID (sessioned). Entries are removed after inactivity.
type AppState = Data<RwLock<HashMap<GameId, GameEntry>>>;

/// Inactivity threshold: games not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct SelectCharacterBody {
    character: String,
}

#[derive(Deserialize)]
struct SubmitMoveBody {
    #[serde(rename = "move")]
    player_move: Move,
}

#[derive(Deserialize)]
struct ResetBody {
    mode: ResetMode,
}

/// Path segment: game id (e.g. /api/games/{id})
#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "rps-showdown-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// The fixed rosters (selectable characters and opponent pool).
#[get("/api/rosters")]
async fn api_rosters() -> HttpResponse {
    HttpResponse::Ok().json(Rosters::builtin())
}

/// Create a new game (returns it with id; client stores id for subsequent requests).
#[post("/api/games")]
async fn api_create_game(state: AppState) -> HttpResponse {
    let session = GameSession::new();
    let id = session.view().id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        GameEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(g[&id].session.view())
}

/// Get a game by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/games/{id}")]
async fn api_get_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(entry.session.view())
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    }
}

/// Select a character by roster id (game must be on the selection screen or Ready).
#[post("/api/games/{id}/character")]
async fn api_select_character(
    state: AppState,
    path: Path<GamePath>,
    body: Json<SelectCharacterBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    match entry.session.select_character(&body.character) {
        Ok(()) => HttpResponse::Ok().json(entry.session.view()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Start the match against a randomly drawn opponent (game must be Ready).
#[post("/api/games/{id}/start")]
async fn api_start_match(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    match entry.session.start_match() {
        Ok(()) => HttpResponse::Ok().json(entry.session.view()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Submit the player's move for the current round (game must be InProgress).
#[post("/api/games/{id}/moves")]
async fn api_submit_move(
    state: AppState,
    path: Path<GamePath>,
    body: Json<SubmitMoveBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    match entry.session.submit_move(body.player_move) {
        Ok(_) => HttpResponse::Ok().json(entry.session.view()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Reset the game: back to selection (full) or rematch with the same pairing.
#[post("/api/games/{id}/reset")]
async fn api_reset(state: AppState, path: Path<GamePath>, body: Json<ResetBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    match entry.session.reset(body.mode) {
        Ok(()) => HttpResponse::Ok().json(entry.session.view()),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<GameId, GameEntry>::new()));

    // Background task: every 30 minutes, remove games inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive game(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_rosters)
            .service(api_create_game)
            .service(api_get_game)
            .service(api_select_character)
            .service(api_start_match)
            .service(api_submit_move)
            .service(api_reset)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
