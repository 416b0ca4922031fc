use super::*;
use crate::config::Config;
use crate::dealer::Dealer;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> Result<(), std::io::Error> {
        let lobby = Arc::new(Dealer::new(&config.dealer));
        let library = Arc::new(config.library());
        let state = web::Data::new(Casino::new(lobby, library));
        log::info!("starting agent server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/health", web::get().to(health))
                .route("/start", web::post().to(start))
                .route("/end", web::post().to(end))
                .route("/reload", web::post().to(reload))
                .route("/enter/{session_id}", web::get().to(enter))
        })
        .workers(config.workers)
        .bind(&config.bind)?
        .run()
        .await
    }
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn start(casino: web::Data<Casino>, body: web::Json<StartSession>) -> impl Responder {
    let ref req = body.into_inner();
    match casino.start(&req.table_id, req.min_bet, req.max_bet).await {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "session_id": id })),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

async fn end(casino: web::Data<Casino>, body: web::Json<EndSession>) -> impl Responder {
    match casino.end(body.session_id).await {
        true => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        false => HttpResponse::Ok().json(serde_json::json!({
            "success": false,
            "message": "Session not found."
        })),
    }
}

async fn reload(casino: web::Data<Casino>) -> impl Responder {
    match casino.library().reload().await {
        Ok(entries) => HttpResponse::Ok().json(serde_json::json!({ "entries": entries })),
        Err(e) => HttpResponse::ServiceUnavailable().body(e.to_string()),
    }
}

async fn enter(
    casino: web::Data<Casino>,
    path: web::Path<crate::SessionId>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    let id = path.into_inner();
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => match casino.into_inner().bridge(id, session, stream).await {
            Ok(()) => response.map_into_left_body(),
            Err(e) => HttpResponse::NotFound()
                .body(e.to_string())
                .map_into_right_body(),
        },
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
