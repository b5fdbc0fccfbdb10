//! Proposal page fixtures

/// A complete proposal page as served by Papers NG, with encoded accents
pub fn proposal_page(title: &str, abstract_text: &str, proposal: &str, track: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<activity id="0">
  <title>{title}</title>
  <authors>
    <person><name>Palestrante</name></person>
  </authors>
  <abstract>{abstract_text}</abstract>
  <descr>{proposal}</descr>
  <level>Intermedi&aacute;rio</level>
  <area id="12">
    <name>{track}</name>
  </area>
</activity>
"#
    )
}

/// Page 1: plain ASCII content
pub fn page_one() -> String {
    proposal_page(
        "Rust in production",
        "Lessons learned",
        "A long talk about ownership.",
        "Development",
    )
}

/// Page 3: decimal and named references
pub fn page_three() -> String {
    proposal_page(
        "Introdu&#231;&#227;o ao Git",
        "Controle de vers&atilde;o",
        "Branches &amp; merges, &lt;sem medo&gt;",
        "Ferramentas",
    )
}

/// Page 5: hexadecimal references and a multi-line description
pub fn page_five() -> String {
    proposal_page(
        "L&#x27;aldil&#xE0;",
        "Resumo",
        "Linha um\nLinha dois",
        "Cultura",
    )
}

/// A page the platform serves for withdrawn proposals
pub const WITHDRAWN_PAGE: &str =
    "<html><head><title>Papers NG</title></head><body>Atividade removida</body></html>";
