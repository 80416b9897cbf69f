//! Plain-text quote rendering for share/print/chat channels.

use crate::quote::QuoteDocument;
use std::fmt::Write;

/// Render a quote as structured plain text.
///
/// Deterministic for a given document: header with company/seller and the
/// date window, hardware section in slot declaration order, extras grouped
/// by category label (groups in first-seen order, entries never merged),
/// trailing grand total. The exact syntax is not contractual; the content
/// and ordering are.
pub fn format_message(document: &QuoteDocument) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "*Orçamento — {}*", document.seller.company);
    let _ = writeln!(out, "Vendedor(a): {}", document.seller.name);
    if let Some(phone) = &document.seller.phone {
        let _ = writeln!(out, "Contato: {}", phone);
    }
    let _ = writeln!(
        out,
        "Emitido em {} — válido até {}",
        document.issued_on.format("%d/%m/%Y"),
        document.valid_until.format("%d/%m/%Y")
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "*Componentes*");
    for line in &document.hardware_lines {
        let _ = writeln!(
            out,
            "- {}: {} — {}",
            line.category_label,
            line.description,
            line.unit_price.display()
        );
    }

    if !document.extra_lines.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "*Adicionais*");
        for label in group_labels(document) {
            let _ = writeln!(out, "{}:", label);
            for line in document
                .extra_lines
                .iter()
                .filter(|l| l.category_label == label)
            {
                let _ = writeln!(out, "- {} — {}", line.description, line.unit_price.display());
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "*Total: {}*", document.grand_total.display());
    out
}

/// Extra category labels in first-seen order, deduplicated.
fn group_labels(document: &QuoteDocument) -> Vec<&str> {
    let mut labels: Vec<&str> = Vec::new();
    for line in &document.extra_lines {
        if !labels.contains(&line.category_label.as_str()) {
            labels.push(&line.category_label);
        }
    }
    labels
}
