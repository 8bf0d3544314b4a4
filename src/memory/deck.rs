//! Deck Utilities
//!
//! Pre-flight integrity check and local reshuffle of a server-dealt deck.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Card;

/// Image keys whose card count is not exactly 2, in first-seen order.
/// Cards without an image are skipped.
pub fn validate_cards(cards: &[Card]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut slot_by_image: HashMap<&str, usize> = HashMap::new();

    for card in cards.iter().filter(|c| !c.image.is_empty()) {
        match slot_by_image.get(card.image.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slot_by_image.insert(&card.image, counts.len());
                counts.push((card.image.clone(), 1));
            }
        }
    }

    counts.retain(|(_, count)| *count != 2);
    counts
}

/// `image (枚数=n)` labels for the confirmation prompt
pub fn invalid_card_labels(invalid: &[(String, usize)]) -> String {
    invalid
        .iter()
        .map(|(image, count)| format!("{} (枚数={})", image, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Uniform in-place permutation (Fisher-Yates)
pub fn shuffle_deck<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn card(id: usize, image: &str, pair_id: u32) -> Card {
        Card {
            id: format!("card_{}", id),
            image: image.to_string(),
            pair_id,
        }
    }

    fn paired_deck(pairs: u32) -> Vec<Card> {
        (0..pairs)
            .flat_map(|p| {
                let image = format!("IMG_{:04}.jpeg", p);
                vec![card(p as usize * 2, &image, p), card(p as usize * 2 + 1, &image, p)]
            })
            .collect()
    }

    #[test]
    fn test_valid_deck_has_no_findings() {
        assert!(validate_cards(&paired_deck(8)).is_empty());
        assert!(validate_cards(&[]).is_empty());
    }

    #[test]
    fn test_reports_only_bad_counts() {
        let cards = vec![
            card(0, "a.jpg", 0),
            card(1, "b.jpg", 1),
            card(2, "a.jpg", 0),
            card(3, "c.jpg", 2),
            card(4, "b.jpg", 1),
            card(5, "c.jpg", 2),
            card(6, "c.jpg", 2),
            card(7, "d.jpg", 3),
        ];
        let invalid = validate_cards(&cards);
        assert_eq!(invalid, vec![("c.jpg".to_string(), 3), ("d.jpg".to_string(), 1)]);
        assert_eq!(invalid_card_labels(&invalid), "c.jpg (枚数=3), d.jpg (枚数=1)");
    }

    #[test]
    fn test_cards_without_image_are_skipped() {
        let cards = vec![card(0, "", 0), card(1, "a.jpg", 1), card(2, "a.jpg", 1)];
        assert!(validate_cards(&cards).is_empty());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let original = paired_deck(8);
        let mut shuffled = original.clone();
        let mut rng = Pcg64::seed_from_u64(7);
        shuffle_deck(&mut shuffled, &mut rng);

        assert_eq!(shuffled.len(), original.len());
        let mut a: Vec<_> = original.iter().map(|c| c.id.clone()).collect();
        let mut b: Vec<_> = shuffled.iter().map(|c| c.id.clone()).collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
        assert!(validate_cards(&shuffled).is_empty());
    }

    #[test]
    fn test_shuffle_moves_cards() {
        let original = paired_deck(8);
        let mut rng = Pcg64::seed_from_u64(42);
        // 16! orderings; a few reshuffles all landing on the identity would mean no shuffling
        let moved = (0..4).any(|_| {
            let mut deck = original.clone();
            shuffle_deck(&mut deck, &mut rng);
            deck != original
        });
        assert!(moved);
    }
}
