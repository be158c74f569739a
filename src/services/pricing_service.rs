use crate::models::session::SuiteTier;
use crate::services::catalog_service::CatalogProvider;

pub struct PricingService;

impl PricingService {
    /// Nightly rate per guest after the suite upgrade
    pub fn effective_nightly_rate(base_price_per_night: f64, tier: SuiteTier) -> f64 {
        base_price_per_night * tier.multiplier()
    }

    /// Sum of the selected add-ons, each charged once per booking.
    /// Ids missing from the catalog cost nothing.
    pub fn calculate_addon_cost<I, S>(catalog: &dyn CatalogProvider, selected: I) -> f64
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        selected
            .into_iter()
            .map(|id| catalog.addon_price(id.as_ref()).unwrap_or(0.0))
            .sum()
    }

    /// Stay cost (rate * guests * nights) plus add-ons. Never rounded here.
    pub fn compute_total<I, S>(
        nights: u32,
        guest_count: u8,
        effective_nightly_rate: f64,
        selected_addon_ids: I,
        catalog: &dyn CatalogProvider,
    ) -> f64
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let per_night = effective_nightly_rate * f64::from(guest_count);
        per_night * f64::from(nights) + Self::calculate_addon_cost(catalog, selected_addon_ids)
    }
}
