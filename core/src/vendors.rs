use std::sync::OnceLock;

use mac_oui::Oui;

use arpwarden_common::vendors::VendorRepository;

static OUI_DB: OnceLock<Oui> = OnceLock::new();

fn get_oui_db() -> &'static Oui {
    OUI_DB.get_or_init(|| Oui::default().expect("failed to load OUI database"))
}

/// Vendor lookups against the embedded IEEE OUI registry.
pub struct MacOuiRepo;

impl VendorRepository for MacOuiRepo {
    fn get_vendor(&self, mac: &str) -> Option<String> {
        match get_oui_db().lookup_by_mac(mac) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            _ => None,
        }
    }
}
