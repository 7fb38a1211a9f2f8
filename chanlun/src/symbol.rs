//! Symbol normalization: maps a user-entered stock code (bare digits or an
//! already-prefixed `exchange.code` string) to a canonical `exchange.code`
//! form and classifies its market. Both functions are pure and
//! non-fallible: an unrecognized shape is logged and passed through
//! unchanged rather than rejected.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Market {
    Hk,
    Etf,
    Index,
    Stock,
}

/// Normalizes a raw stock code, applying these rules in order:
/// 1. a bare all-digit code of 5 or fewer digits is an HK code, returned
///    unchanged;
/// 2. a code containing both `.` and `HK` is an already-qualified HK code,
///    returned unchanged (uppercase preserved);
/// 3. any other code containing `.` is already exchange-qualified, returned
///    lowercased;
/// 4. an exactly-6-digit code is prefixed by exchange per its leading
///    digit(s): `6` → `sh.`; `0`/`3` → `sz.`; `5` → `sh.` (ETF); `15xxxx` →
///    `sz.` (ETF); `8`/`9`/`4` → `bj.`; anything else unchanged;
/// 5. anything else is returned unchanged.
pub fn normalize(code: &str) -> String {
    let code = code.trim().to_uppercase();

    if code.bytes().all(|b| b.is_ascii_digit()) && code.len() <= 5 && !code.is_empty() {
        return code;
    }

    if code.contains('.') && code.contains("HK") {
        return code;
    }

    if code.contains('.') {
        return code.to_lowercase();
    }

    if code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit()) {
        let first = code.as_bytes()[0];
        return match first {
            b'6' => format!("sh.{code}"),
            b'0' | b'3' => format!("sz.{code}"),
            b'5' => format!("sh.{code}"),
            b'1' if code.starts_with("15") => format!("sz.{code}"),
            b'8' | b'9' | b'4' => format!("bj.{code}"),
            _ => {
                tracing::warn!(%code, "unrecognized exchange prefix for 6-digit code");
                code
            }
        };
    }

    tracing::warn!(%code, "stock code is not a recognized shape, passing through unchanged");
    code
}

/// Classifies a raw (not necessarily normalized) stock code's market: HK as
/// `normalize` detects it, ETF if it starts with `5` or (6 digits) `15`,
/// index if it starts with `000`/`399`/`880`, else stock.
pub fn market_of(code: &str) -> Market {
    let code = code.trim().to_uppercase();

    if code.bytes().all(|b| b.is_ascii_digit()) && code.len() <= 5 && !code.is_empty() {
        return Market::Hk;
    }
    if code.contains('.') && code.contains("HK") {
        return Market::Hk;
    }

    if code.starts_with('5') || (code.starts_with("15") && code.len() == 6) {
        return Market::Etf;
    }

    if code.starts_with("000") || code.starts_with("399") || code.starts_with("880") {
        return Market::Index;
    }

    Market::Stock
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shanghai_main_board() {
        assert_eq!(normalize("600000"), "sh.600000");
    }

    #[test]
    fn shanghai_etf() {
        assert_eq!(normalize("510300"), "sh.510300");
        assert_eq!(market_of("510300"), Market::Etf);
    }

    #[test]
    fn shenzhen_main_and_gem_board() {
        assert_eq!(normalize("000001"), "sz.000001");
        assert_eq!(normalize("300750"), "sz.300750");
    }

    #[test]
    fn shenzhen_etf_15_prefix() {
        assert_eq!(normalize("159915"), "sz.159915");
        assert_eq!(market_of("159915"), Market::Etf);
    }

    #[test]
    fn beijing_exchange() {
        assert_eq!(normalize("830799"), "bj.830799");
        assert_eq!(normalize("920000"), "bj.920000");
    }

    #[test]
    fn already_prefixed_code_passes_through_lowercased() {
        assert_eq!(normalize("SH.600000"), "sh.600000");
    }

    #[test]
    fn hk_bare_digit_code_unchanged() {
        assert_eq!(normalize("700"), "700");
        assert_eq!(normalize("00700"), "00700");
        assert_eq!(market_of("00700"), Market::Hk);
    }

    #[test]
    fn hk_qualified_code_unchanged_uppercase_preserved() {
        assert_eq!(normalize("00700.hk"), "00700.HK");
        assert_eq!(market_of("00700.hk"), Market::Hk);
    }

    #[test]
    fn malformed_code_passes_through_unchanged() {
        assert_eq!(normalize("ABCDEF"), "ABCDEF");
        assert_eq!(normalize("60000"), "60000");
    }

    #[test]
    fn index_codes_classified() {
        assert_eq!(market_of("000001"), Market::Index);
        assert_eq!(market_of("399001"), Market::Index);
        assert_eq!(market_of("880001"), Market::Index);
    }

    #[test]
    fn plain_stock_code_classified() {
        assert_eq!(market_of("600000"), Market::Stock);
    }
}
