//! Pure anchor slug generation for navigation labels.
//!
//! Navigation links target `#<slug>` fragments derived from the visible
//! label text.

/// Derive an anchor slug from a navigation label.
///
/// Lower-cases the label and collapses whitespace runs to single hyphens.
/// Characters other than whitespace pass through unchanged, so labels keep
/// their punctuation in the fragment.
///
/// The derivation is deterministic and idempotent; two labels that collapse
/// to the same slug both render with identical targets.
///
/// # Examples
///
/// ```
/// use masthead::nav::anchor_slug;
///
/// assert_eq!(anchor_slug("Our Products"), "our-products");
/// assert_eq!(anchor_slug("Naans & Parathas"), "naans-&-parathas");
/// assert_eq!(anchor_slug("FAQs"), "faqs");
/// ```
pub fn anchor_slug(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut chars = label.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            slug.push('-');
        } else {
            slug.extend(c.to_lowercase());
        }
    }

    slug
}
