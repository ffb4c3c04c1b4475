// src/config/config_structs.rs

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Porta usada quando PORT não é informada.
pub const PORTA_PADRAO: u16 = 3000;
/// Conexões simultâneas no pool quando PGPOOL_MAX não é informado.
pub const MAX_CONEXOES_PADRAO: u32 = 5;
/// Tempo que uma conexão ociosa fica aberta antes de ser liberada.
pub const IDLE_TIMEOUT_PADRAO: Duration = Duration::from_millis(30_000);
/// Tempo máximo para obter (ou abrir) uma conexão.
pub const CONNECTION_TIMEOUT_PADRAO: Duration = Duration::from_millis(10_000);

/// Erros de configuração. Todos são fatais: o processo encerra antes de abrir a porta.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Faltou DATABASE_URL")]
    FaltaDatabaseUrl,

    #[error("Valor inválido para {variavel}: {valor:?}")]
    ValorInvalido { variavel: &'static str, valor: String },
}

/// Política de segurança do transporte até o Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModoSsl {
    /// Sem TLS. Só faz sentido em rede privada confiável.
    Desativado,
    /// TLS sem validar o certificado do servidor.
    SemValidacao,
    /// TLS validando certificado e hostname.
    ComValidacao,
}

impl ModoSsl {
    /// Deriva o modo a partir da própria URL de conexão.
    ///
    /// Hosts internos (o provedor coloca ".internal." no nome) ficam sem TLS;
    /// qualquer outro host atravessa rede não confiável e exige certificado válido.
    pub fn derivar(database_url: &str) -> Self {
        if database_url.to_ascii_lowercase().contains(".internal.") {
            ModoSsl::Desativado
        } else {
            ModoSsl::ComValidacao
        }
    }
}

impl FromStr for ModoSsl {
    type Err = ConfigError;

    fn from_str(valor: &str) -> Result<Self, Self::Err> {
        match valor.trim().to_ascii_lowercase().as_str() {
            "disable" | "off" | "false" => Ok(ModoSsl::Desativado),
            "require" | "no-verify" => Ok(ModoSsl::SemValidacao),
            "verify-full" | "verify" => Ok(ModoSsl::ComValidacao),
            _ => Err(ConfigError::ValorInvalido {
                variavel: "PGSSLMODE",
                valor: valor.to_string(),
            }),
        }
    }
}

/// Opções do pool de conexões.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_conexoes: u32,
    /// `None` mantém o `sslmode` que já veio na URL.
    pub modo_ssl: Option<ModoSsl>,
    pub idle_timeout: Duration,
    pub connection_timeout: Duration,
    pub keep_alive: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_conexoes: MAX_CONEXOES_PADRAO,
            modo_ssl: None,
            idle_timeout: IDLE_TIMEOUT_PADRAO,
            connection_timeout: CONNECTION_TIMEOUT_PADRAO,
            keep_alive: true,
        }
    }
}

/// Configuração completa da aplicação, lida do ambiente na inicialização.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub porta: u16,
    pub pool: PoolConfig,
}

// A URL carrega a senha do banco, então não entra no Debug.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"<oculta>")
            .field("porta", &self.porta)
            .field("pool", &self.pool)
            .finish()
    }
}

impl AppConfig {
    /// Lê a configuração das variáveis de ambiente do processo.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|chave| std::env::var(chave).ok())
    }

    /// Lê a configuração usando `lookup` como fonte das variáveis.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::FaltaDatabaseUrl)?;

        let porta = ler_valor(&lookup, "PORT", PORTA_PADRAO)?;

        let max_conexoes = ler_valor(&lookup, "PGPOOL_MAX", MAX_CONEXOES_PADRAO)?;
        if max_conexoes == 0 {
            return Err(ConfigError::ValorInvalido {
                variavel: "PGPOOL_MAX",
                valor: "0".to_string(),
            });
        }

        // Ordem: PGSSLMODE explícito, depois sslmode da URL, por fim o host.
        let modo_ssl = match lookup("PGSSLMODE").filter(|v| !v.trim().is_empty()) {
            Some(valor) => Some(valor.parse::<ModoSsl>()?),
            None if url_define_sslmode(&database_url) => None,
            None => Some(ModoSsl::derivar(&database_url)),
        };

        let idle_timeout = Duration::from_millis(ler_valor(
            &lookup,
            "PGPOOL_IDLE_TIMEOUT_MS",
            IDLE_TIMEOUT_PADRAO.as_millis() as u64,
        )?);
        let connection_timeout = Duration::from_millis(ler_valor(
            &lookup,
            "PGPOOL_CONNECTION_TIMEOUT_MS",
            CONNECTION_TIMEOUT_PADRAO.as_millis() as u64,
        )?);
        // Com zero, toda tentativa de obter conexão expira na hora.
        if connection_timeout.is_zero() {
            return Err(ConfigError::ValorInvalido {
                variavel: "PGPOOL_CONNECTION_TIMEOUT_MS",
                valor: "0".to_string(),
            });
        }

        let keep_alive = match lookup("PGPOOL_KEEPALIVE") {
            Some(valor) => ler_booleano("PGPOOL_KEEPALIVE", &valor)?,
            None => true,
        };

        Ok(Self {
            database_url,
            porta,
            pool: PoolConfig {
                max_conexoes,
                modo_ssl,
                idle_timeout,
                connection_timeout,
                keep_alive,
            },
        })
    }
}

/// Indica se a query string da URL já traz `sslmode` (ou `ssl-mode`).
///
/// Só olha depois do `?`, então uma senha contendo "sslmode=" não conta.
fn url_define_sslmode(database_url: &str) -> bool {
    let Some((_, query)) = database_url.split_once('?') else {
        return false;
    };

    query.split('&').any(|par| {
        let chave = par.split_once('=').map_or(par, |(chave, _)| chave);
        chave.eq_ignore_ascii_case("sslmode") || chave.eq_ignore_ascii_case("ssl-mode")
    })
}

/// Lê uma variável numérica; ausente ou vazia usa o padrão.
fn ler_valor<F, T>(lookup: &F, variavel: &'static str, padrao: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(variavel) {
        Some(valor) if !valor.trim().is_empty() => {
            valor
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::ValorInvalido {
                    variavel,
                    valor: valor.clone(),
                })
        }
        _ => Ok(padrao),
    }
}

fn ler_booleano(variavel: &'static str, valor: &str) -> Result<bool, ConfigError> {
    match valor.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "sim" | "on" => Ok(true),
        "false" | "0" | "no" | "nao" | "não" | "off" => Ok(false),
        _ => Err(ConfigError::ValorInvalido {
            variavel,
            valor: valor.to_string(),
        }),
    }
}
