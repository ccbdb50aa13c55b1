//! Currency formatting for the financial summary slide.

use report_core::FinancialFigures;

/// Format an amount as dollars with thousands separators and two decimals.
///
/// `1234.5` becomes `$1,234.50`; negative amounts keep the sign after the
/// dollar sign (`$-1,234.50`).
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount.is_sign_negative() { "-" } else { "" };

    format!("${}{}.{}", sign, group_thousands(whole), cents)
}

/// Insert a comma between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Body text of the financial summary slide.
pub fn financial_summary_text(figures: &FinancialFigures) -> String {
    format!(
        "Total Revenue: {}\nTotal Expenses: {}\nNet Profit: {}",
        format_currency(figures.revenue),
        format_currency(figures.expenses),
        format_currency(figures.net_profit)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.5), "$5.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(12500.0), "$12,500.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(-1234.5), "$-1,234.50");
        assert_eq!(format_currency(-12.0), "$-12.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }

    #[test]
    fn test_financial_summary_text() {
        let figures = FinancialFigures {
            revenue: 12500.0,
            expenses: 8300.5,
            net_profit: 4199.5,
        };

        assert_eq!(
            financial_summary_text(&figures),
            "Total Revenue: $12,500.00\nTotal Expenses: $8,300.50\nNet Profit: $4,199.50"
        );
    }
}
