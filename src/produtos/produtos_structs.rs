// src/produtos/produtos_structs.rs

use serde::Serialize;
use sqlx::FromRow;

/// Consulta da listagem: um produto por linha, com a categoria e os links
/// dos anexos agregados em ordem de `idanexo`.
///
/// O `JOIN` com categoria é interno de propósito: produto sem categoria
/// correspondente fica fora do resultado. Sem anexos, `anexos` vem como
/// array vazio (nunca NULL) graças ao `COALESCE`.
///
/// `preco` sai como texto para preservar a escala da coluna (`35.00`,
/// `129.90`), exatamente como o Postgres formata o NUMERIC.
pub const CONSULTA_PRODUTOS: &str = r#"
SELECT
  p.idproduto,
  p.nome        AS produto_nome,
  p.descricao,
  p.preco::text AS preco,
  p.quantidade,
  c.idcategoria,
  c.nome        AS categoria_nome,
  COALESCE(
    array_remove(array_agg(a.link ORDER BY a.idanexo), NULL),
    ARRAY[]::text[]
  )             AS anexos
FROM produto p
JOIN categoria c ON c.idcategoria = p.idcategoria
LEFT JOIN anexo a ON a.idproduto = p.idproduto
GROUP BY
  p.idproduto, p.nome, p.descricao, p.preco, p.quantidade,
  c.idcategoria, c.nome
ORDER BY p.idproduto
"#;

/// Linha devolvida por `GET /produtos`, já no formato do JSON de resposta.
///
/// Os tipos assumem o esquema atual: ids e `quantidade` em INTEGER, nomes em
/// TEXT/VARCHAR. Uma coluna BIGINT ou SMALLINT nessas posições falha na
/// decodificação e a rota responde 500.
#[derive(Serialize, FromRow, Debug)]
pub struct ProdutoView {
    pub idproduto: i32,
    pub produto_nome: String,
    pub descricao: Option<String>,
    pub preco: String, // Texto do NUMERIC, com a escala da coluna
    pub quantidade: i32,
    pub idcategoria: i32,
    pub categoria_nome: String,
    pub anexos: Vec<String>,
}
