//! Tour route codes and their display labels.
//!
//! The contact form sends one of these codes in `roteiro`. Codes that are not
//! in the table are shown verbatim.

/// Known route codes and labels.
pub const ROUTES: &[(&str, &str)] = &[
    ("ilhaPelado", "Ilha do Pelado"),
    ("lagoaAzul", "Lagoa Azul"),
    ("ilhaCotia", "Ilha da Cotia"),
    ("sacoMamangua", "Saco do Mamanguá"),
    ("praiaVermelha", "Praia Vermelha"),
    ("porDoSol", "Passeio do Pôr do Sol"),
    ("passeioPrivativo", "Passeio Privativo"),
];

/// Resolve a route code to its label, or return the code unchanged.
pub fn route_label(key: &str) -> &str {
    ROUTES
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}
