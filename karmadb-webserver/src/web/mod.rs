use rocket::{
    catch, catchers, config::Config as RocketCfg, serde::json::Json, Catcher, Request, Rocket,
    Route,
};
use time::Duration;

pub mod api;
mod guards;
pub mod jwt;
pub mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// How long an issued access token remains valid
    pub token_valid_for: Duration,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            token_valid_for: Duration::days(1),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    let jwt_state = jwt::JwtState::new(cfg.token_valid_for);

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(cfg)
        .manage(version)
        .register("/", catchers());

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

fn catchers() -> Vec<Catcher> {
    catchers![unauthorized, not_found, unprocessable_entity]
}

fn error_body(status: u16, req: &Request) -> Json<api::JsonErrorResponse> {
    Json(api::JsonErrorResponse {
        http_status: status,
        message: format!("{} {}", req.method(), req.uri()),
    })
}

#[catch(401)]
fn unauthorized(req: &Request) -> Json<api::JsonErrorResponse> {
    let mut res = error_body(401, req);
    res.message = "Missing or invalid access token".into();
    res
}

#[catch(404)]
fn not_found(req: &Request) -> Json<api::JsonErrorResponse> {
    error_body(404, req)
}

#[catch(422)]
fn unprocessable_entity(req: &Request) -> Json<api::JsonErrorResponse> {
    error_body(422, req)
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg, version: &'static str) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
