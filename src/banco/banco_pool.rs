// src/banco/banco_pool.rs

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Connection, PgPool};

use crate::config::config_structs::{ModoSsl, PoolConfig};

/// Comando trivial usado só para verificar a conectividade.
pub const SONDA: &str = "SELECT 1";

/// Converte a política de SSL da aplicação no modo equivalente do sqlx.
pub fn modo_pg(modo: ModoSsl) -> PgSslMode {
    match modo {
        ModoSsl::Desativado => PgSslMode::Disable,
        ModoSsl::SemValidacao => PgSslMode::Require,
        ModoSsl::ComValidacao => PgSslMode::VerifyFull,
    }
}

/// Monta as opções de conexão a partir da URL, aplicando o modo SSL configurado.
pub fn opcoes_de_conexao(
    database_url: &str,
    modo_ssl: Option<ModoSsl>,
) -> Result<PgConnectOptions, sqlx::Error> {
    let opcoes = PgConnectOptions::from_str(database_url)?;

    Ok(match modo_ssl {
        Some(modo) => opcoes.ssl_mode(modo_pg(modo)),
        None => opcoes,
    })
}

/// Cria o pool de conexões com o Postgres.
///
/// O pool é preguiçoso: nenhuma conexão é aberta aqui, então a subida do
/// servidor nunca espera pelo banco. Cada consulta pega uma conexão, aguardando
/// no máximo `connection_timeout`, e a devolve ao terminar (com sucesso ou erro).
///
/// Com `keep_alive` ligado, conexões ociosas recebem um ping antes de serem
/// reutilizadas; se o servidor derrubou a conexão, a falha é registrada no log
/// e o pool abre outra no lugar, sem afetar a requisição.
pub fn criar_pool(database_url: &str, config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    let opcoes = opcoes_de_conexao(database_url, config.modo_ssl)?;
    let keep_alive = config.keep_alive;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_conexoes)
        .acquire_timeout(config.connection_timeout)
        .idle_timeout(config.idle_timeout)
        // O ping é feito no before_acquire, para poder registrar a falha.
        .test_before_acquire(false)
        .after_connect(|_conn, _meta| {
            Box::pin(async move {
                tracing::debug!("Nova conexão com o Postgres aberta");
                Ok(())
            })
        })
        .before_acquire(move |conn, meta| {
            Box::pin(async move {
                if !keep_alive {
                    return Ok(true);
                }

                match conn.ping().await {
                    Ok(()) => Ok(true),
                    Err(e) => {
                        // Conexão descartada; o pool tenta outra.
                        tracing::warn!(ociosa_por = ?meta.idle_for, "Pool error: {}", e);
                        Ok(false)
                    }
                }
            })
        })
        .connect_lazy_with(opcoes);

    tracing::debug!(
        max_conexoes = config.max_conexoes,
        ssl = ?config.modo_ssl,
        "Pool de conexões criado"
    );

    Ok(pool)
}

/// Executa a sonda (`SELECT 1`) no pool.
pub async fn sondar(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(SONDA).execute(pool).await?;
    Ok(())
}

/// Teste inicial de conexão, em segundo plano.
///
/// Só registra o resultado; o servidor sobe de qualquer forma.
pub fn sondar_em_segundo_plano(pool: PgPool) {
    actix_web::rt::spawn(async move {
        match sondar(&pool).await {
            Ok(()) => tracing::info!("Conectado ao Postgres com sucesso."),
            Err(e) => tracing::error!("Falha no SELECT 1: {}", e),
        }
    });
}
