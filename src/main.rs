use anyhow::bail;
use time::OffsetDateTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use streampoint::{
    config::Config,
    format::{format_currency, format_date, format_number},
    services::{PointsService, SubscriptionService},
};

/// Prints the purchase estimate a plan page would show: localized price,
/// cashback points, and the expiration date for a period starting today.
fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,streampoint=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(price_arg), Some(period_code)) = (args.next(), args.next()) else {
        bail!("usage: streampoint-estimate <price-cop> <period-code> [--first-purchase]");
    };
    let is_first_purchase = args.any(|a| a == "--first-purchase");

    let Ok(price) = price_arg.parse::<f64>() else {
        bail!("price must be numeric, got {price_arg:?}");
    };

    let config = Config::load()?;
    tracing::debug!(?config, "Loaded configuration");

    let points = PointsService::new(&config.rewards);
    let subscriptions = SubscriptionService::new(&config.expiry);

    let today = OffsetDateTime::now_utc().date();
    let estimate = points.estimate_points(price, is_first_purchase);
    let expires = subscriptions.expiration_from_code(today, &period_code);

    println!("Price:   {}", format_currency(price));
    println!("Points:  +{} puntos", format_number(estimate as f64));
    println!("Starts:  {}", format_date(today));
    println!("Expires: {}", format_date(expires));

    Ok(())
}
