// src/main.rs

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

// Importa os módulos
mod banco;    // Pool de conexões com o Postgres
mod config;   // Configuração lida do ambiente
mod produtos; // Módulo de produtos
mod saude;    // Healthcheck
mod shared;   // Módulo shared

use config::config_structs::AppConfig;

// Estado compartilhado entre as rotas: o pool criado na inicialização.
pub struct AppState {
    pub db_pool: PgPool,
}

/// CORS liberado: qualquer origem, método e cabeçalho, com `*` na resposta.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}

/// Registra as rotas da API e a resposta JSON para caminhos desconhecidos.
fn configurar_rotas(cfg: &mut web::ServiceConfig) {
    cfg.service(saude::saude_router::verificar_saude)
        .service(produtos::produtos_router::buscar_produtos)
        .default_service(web::to(shared::shared_errors::rota_nao_encontrada));
}

fn iniciar_logs() {
    let filtro = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filtro).init();
}

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // O .env é opcional; em produção as variáveis vêm do ambiente.
    dotenvy::dotenv().ok();
    iniciar_logs();

    // Sem configuração válida não há o que servir: encerra antes de abrir a porta.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let db_pool = match banco::banco_pool::criar_pool(&config.database_url, &config.pool) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("DATABASE_URL inválida: {}", e);
            std::process::exit(1);
        }
    };

    // Teste inicial de conexão, sem bloquear a subida do servidor.
    banco::banco_pool::sondar_em_segundo_plano(db_pool.clone());

    let app_state = web::Data::new(AppState { db_pool });
    let porta = config.porta;

    let servidor = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(cors())
            .wrap(middleware::Logger::default())
            .configure(configurar_rotas)
    })
    .bind(("0.0.0.0", porta))?;

    tracing::info!("API ouvindo em http://localhost:{}", porta);

    servidor.run().await
}
