/// Generates one test per email sample, asserting the description extracted
/// from it. Descriptions are compared with the `&middot;` separator rendered
/// as `·`.
#[macro_export]
macro_rules! assert_descriptions {
    (
        $(
            $test_name:ident : html => $html:expr, description => $description:expr
        ),+ $(,)?
    ) => {
        $(
            #[test]
            fn $test_name() {
                let result = publish_daily::extract_description($html);

                assert_that(&result.replace("&middot;", "\u{b7}"))
                    .is_equal_to($description.to_owned());
            }
        )+
    }
}

/// An email shaped like the real daily report: statistics spread across table
/// cells and styled spans.
pub(crate) const FULL_REPORT: &str = r#"<!DOCTYPE html>
<html>
<head><title>AutoTrader Daily</title><style>td { padding: 4px; }</style></head>
<body>
  <h1>AutoTrader Daily Predictions</h1>
  <table>
    <tr><td><b>Total Tickers:</b></td><td>630</td></tr>
  </table>
  <h3>Fear &amp; Greed</h3>
  <div>Stock Market: <span style="color:#e67e22">40/100 - FEAR</span></div>
  <div>Crypto Market: <span style="color:#c0392b">9/100 - EXTREME FEAR</span></div>
  <h3>Congress Trades</h3>
  <p>50 trades in last
     14 days</p>
</body>
</html>"#;
