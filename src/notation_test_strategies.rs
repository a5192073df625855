use crate::common::*;
use proptest::prelude::*;

/// A generated notation string along with the groups and modifier it must parse to.
#[derive(Debug, Clone)]
pub(crate) struct Notation {
    pub text: String,
    pub groups: Vec<(UInt, UInt, Sign)>,
    pub modifier: Int,
}

#[derive(Debug, Clone)]
pub(crate) enum Term {
    Dice { count: Option<UInt>, sides: UInt },
    Flat(UInt),
}

pub(crate) fn sign_strategy() -> impl Strategy<Value = Sign> {
    prop_oneof![Just(Sign::Pos), Just(Sign::Neg)]
}

pub(crate) fn dice_strategy() -> impl Strategy<Value = Term> {
    (prop::option::of(1u32..=20), 1u32..=100).prop_map(|(count, sides)| Term::Dice { count, sides })
}

pub(crate) fn term_strategy() -> impl Strategy<Value = Term> {
    prop_oneof![dice_strategy(), (0u32..=1000).prop_map(Term::Flat)]
}

// Every term after the first carries an explicit sign: without one, "d6" then
// "3" would read back as "d63".
pub(crate) fn notation_strategy() -> impl Strategy<Value = Notation> {
    (
        (sign_strategy(), dice_strategy()),
        prop::collection::vec((sign_strategy(), term_strategy()), 0..6),
        any::<prop::sample::Index>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(dice, mut terms, at, omit_first_plus, spaced)| {
            terms.insert(at.index(terms.len() + 1), dice);

            let mut text = String::new();
            let mut groups = Vec::new();
            let mut modifier: Int = 0;

            for (i, (sign, term)) in terms.into_iter().enumerate() {
                if i > 0 && spaced {
                    text.push(' ');
                }
                if !(i == 0 && omit_first_plus && sign == Sign::Pos) {
                    text.push_str(&sign.to_string());
                }
                if spaced && i > 0 {
                    text.push(' ');
                }
                match term {
                    Term::Dice { count, sides } => {
                        if let Some(count) = count {
                            text.push_str(&count.to_string());
                        }
                        text.push_str(&format!("d{}", sides));
                        groups.push((count.unwrap_or(1), sides, sign));
                    }
                    Term::Flat(x) => {
                        text.push_str(&x.to_string());
                        modifier += sign.apply(Int::from(x));
                    }
                }
            }

            Notation {
                text,
                groups,
                modifier,
            }
        })
}
