use super::config::ChecklistConfig;
use super::registry::CandidateRegistry;
use super::rules::{item, RuleItem};

/// Generic low-score items drawn in order when the rule groups run short.
pub const PADDING_POOL: &[RuleItem] = &[
    item("Travel-sized laundry bag", "Personal Care", 0.45, &["Organize worn clothing"]),
    item("Extra device batteries", "Electronics", 0.45, &["Backup power"]),
    item("Offline maps and guides", "Navigation", 0.5, &["Connectivity gaps"]),
    item("Copies of important documents", "Documents", 0.5, &["Redundancy for safety"]),
    item("Reusable shopping tote", "Convenience", 0.4, &["Carry purchases"]),
    item("Compression packing cubes", "Convenience", 0.42, &["Organize luggage"]),
    item("Hand sanitizer and wipes", "Health", 0.48, &["Hygiene in transit"]),
    item("Portable power bank", "Electronics", 0.62, &["Extended device uptime"]),
    item("Notebook and pen", "Documents", 0.4, &["Capture notes and addresses"]),
    item("Small sewing kit", "Convenience", 0.35, &["Wardrobe repairs"]),
    item("Earplugs", "Comfort", 0.38, &["Sleep in noisy settings"]),
    item("Eye mask", "Comfort", 0.37, &["Improve rest in transit"]),
    item("Travel pillow", "Comfort", 0.4, &["Neck support"]),
    item("Healthy grab-and-go snacks", "Food", 0.42, &["Keep energy stable"]),
    item("Refillable toiletry containers", "Personal Care", 0.4, &["Custom product sizes"]),
    item("Shoe bags", "Convenience", 0.33, &["Protect clothing"]),
    item("Travel clothesline", "Convenience", 0.36, &["Dry clothing quickly"]),
    item("Waterproof pouches", "Safety", 0.37, &["Protect electronics"]),
    item("Backup credit card", "Finance", 0.38, &["Redundancy for payments"]),
    item("International adapter", "Electronics", 0.55, &["Charge devices abroad"]),
    item("SIM card or eSIM plan", "Electronics", 0.5, &["Data connectivity"]),
    item("Weather alert subscriptions", "Safety", 0.35, &["Timely updates"]),
    item("Emergency contact card", "Safety", 0.4, &["Share critical info"]),
    item("Reusable utensils", "Food", 0.3, &["Eco-friendly dining"]),
    item("Collapsible daypack", "Convenience", 0.45, &["Daily outings"]),
    item("Small first aid add-ons", "Health", 0.44, &["Bandages and pain relief"]),
    item("Portable hotspot", "Electronics", 0.47, &["Reliable connectivity"]),
    item("Secure money belt", "Safety", 0.5, &["Lower theft risk"]),
    item("Travel-sized lint roller", "Clothing", 0.3, &["Maintain outfits"]),
    item("Refillable hand soap sheets", "Health", 0.31, &["Hygiene flexibility"]),
    item("Foldable rain poncho", "Clothing", 0.34, &["Unexpected showers"]),
    item("Laundry stain remover pen", "Personal Care", 0.32, &["Quick fixes"]),
    item("Multi-port charger", "Electronics", 0.46, &["Charge multiple devices"]),
    item("Noise-cancelling headphones", "Entertainment", 0.52, &["Better focus and rest"]),
    item("Travel-sized board games", "Entertainment", 0.28, &["Group fun"]),
    item("Wellness supplements", "Health", 0.29, &["Immune support"]),
    item("Seat-back organizer", "Comfort", 0.27, &["Keep essentials accessible"]),
    item("Travel-safe cutlery", "Food", 0.26, &["Picnics and takeout"]),
    item("Reusable straw", "Food", 0.25, &["Reduce waste"]),
    item("Packing checklist printout", "Documents", 0.24, &["Track packed items"]),
    item("Shoe deodorizer packets", "Personal Care", 0.23, &["Odor control"]),
    item("Softshell jacket", "Clothing", 0.35, &["Versatile layer"]),
    item("Foldable hat", "Clothing", 0.28, &["Sun or light rain coverage"]),
    item("Bluetooth tracker tags", "Safety", 0.41, &["Locate belongings"]),
    item("Handheld luggage scale", "Convenience", 0.33, &["Avoid overweight fees"]),
    item("Travel-sized yoga mat", "Health", 0.27, &["Maintain routines"]),
    item("Journal for reflection", "Entertainment", 0.22, &["Document experiences"]),
    item("Travel detergent sheets", "Personal Care", 0.26, &["Compact laundry option"]),
    item("Quick-dry base layers", "Clothing", 0.31, &["Comfort in varying climates"]),
    item("Clip-on reading light", "Entertainment", 0.21, &["Read without disturbing others"]),
    item("Emergency cash stash", "Finance", 0.34, &["Backup funds"]),
];

/// Tops the registry up to `minimum_items`, then keeps drawing from the pool
/// only while the total stays within `maximum_items`.
///
/// Registered rule items are never evicted, and an exhausted pool simply
/// leaves the registry short of the minimum.
pub(crate) fn ensure_minimum_items(registry: &mut CandidateRegistry<'_>, config: &ChecklistConfig) {
    let mut pool = PADDING_POOL.iter();

    while registry.len() < config.minimum_items {
        match pool.next() {
            Some(entry) => registry.register(entry),
            None => return,
        }
    }

    let headroom = config.maximum_items.saturating_sub(registry.len());
    for entry in pool.take(headroom) {
        if registry.len() >= config.maximum_items {
            break;
        }
        registry.register(entry);
    }
}
