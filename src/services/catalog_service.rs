use crate::models::catalog::{Addon, Retreat, RetreatKey, RetreatTheme, ADDONS, RETREATS, THEMES};

/// Read-only source of packages and add-ons.
pub trait CatalogProvider: Send + Sync {
    fn get_package(&self, key: RetreatKey) -> &Retreat;
    fn theme(&self, key: RetreatKey) -> &RetreatTheme;
    fn list_addons(&self) -> &[Addon];

    fn list_packages(&self) -> Vec<&Retreat> {
        RetreatKey::ALL
            .into_iter()
            .map(|key| self.get_package(key))
            .collect()
    }

    fn addon_price(&self, id: &str) -> Option<f64> {
        self.list_addons()
            .iter()
            .find(|addon| addon.id == id)
            .map(|addon| addon.price)
    }
}

/// Catalog backed by the bundled demo dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoCatalog;

impl CatalogProvider for DemoCatalog {
    fn get_package(&self, key: RetreatKey) -> &Retreat {
        RETREATS
            .iter()
            .find(|retreat| retreat.id == key)
            .unwrap_or(&RETREATS[0])
    }

    fn theme(&self, key: RetreatKey) -> &RetreatTheme {
        THEMES
            .iter()
            .find(|(theme_key, _)| *theme_key == key)
            .map(|(_, theme)| theme)
            .unwrap_or(&THEMES[0].1)
    }

    fn list_addons(&self) -> &[Addon] {
        &ADDONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_key_resolves_to_its_own_package() {
        let catalog = DemoCatalog;
        for key in RetreatKey::ALL {
            assert_eq!(catalog.get_package(key).id, key);
            assert!(!catalog.theme(key).goals.is_empty());
        }
        assert_eq!(catalog.list_packages().len(), 4);
    }

    #[test]
    fn test_base_prices() {
        let catalog = DemoCatalog;
        assert_eq!(catalog.get_package(RetreatKey::Weightloss).base_price_per_night, 220.0);
        assert_eq!(catalog.get_package(RetreatKey::Vegan).base_price_per_night, 180.0);
        assert_eq!(catalog.get_package(RetreatKey::Mindfulness).base_price_per_night, 200.0);
        assert_eq!(catalog.get_package(RetreatKey::Detox).base_price_per_night, 160.0);
    }

    #[test]
    fn test_addon_ids_are_unique() {
        let catalog = DemoCatalog;
        let ids: HashSet<_> = catalog.list_addons().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), catalog.list_addons().len());
    }

    #[test]
    fn test_addon_price_lookup() {
        let catalog = DemoCatalog;
        assert_eq!(catalog.addon_price("spa"), Some(95.0));
        assert_eq!(catalog.addon_price("airport"), Some(50.0));
        assert_eq!(catalog.addon_price("helicopter"), None);
    }

    #[test]
    fn test_retreat_key_parsing() {
        assert_eq!("vegan".parse::<RetreatKey>(), Ok(RetreatKey::Vegan));
        assert!("Vegan".parse::<RetreatKey>().is_err());
        assert_eq!(RetreatKey::Detox.to_string(), "detox");
    }
}
