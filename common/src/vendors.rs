/// Resolves a hardware address to the vendor that registered its OUI
/// prefix. Enrichment only, lookups never influence analysis.
pub trait VendorRepository: Send + Sync {
    fn get_vendor(&self, mac: &str) -> Option<String>;
}
