//! Canned assistant replies. One of three fixed templates is chosen uniformly
//! at random and its numeric placeholders are filled from bounded ranges. The
//! query text never influences the choice or the numbers: the engine simulates
//! analysis, it does not perform any.

use rand::{Rng, RngExt};
use std::ops::Range;

pub const PROFILES_ANALYZED: Range<u64> = 100..600;
pub const ACTIVE_FLOATS: Range<u64> = 20..70;
pub const GLOBAL_PROFILES: Range<u64> = 500_000..1_500_000;
pub const OCEAN_BASINS: Range<u64> = 50..80;
pub const HOURS_AGO: Range<u64> = 1..25;

struct Template {
    ranges: &'static [Range<u64>],
    render: fn(&[u64]) -> String,
}

static TEMPLATES: &[Template] = &[
    Template {
        ranges: &[PROFILES_ANALYZED, ACTIVE_FLOATS],
        render: |f| {
            format!(
                "Based on the latest ARGO float data, I've analyzed {} profiles \
                 from {} active floats. Here are the key findings:\n\n\
                 • Temperature anomaly detected at 200m depth\n\
                 • Salinity levels show seasonal variation\n\
                 • Oxygen concentrations within normal range\n\n\
                 Would you like me to generate a detailed visualization?",
                f[0], f[1]
            )
        },
    },
    Template {
        ranges: &[ACTIVE_FLOATS, HOURS_AGO],
        render: |f| {
            format!(
                "I've processed your oceanographic query and found interesting \
                 patterns in the data:\n\n\
                 • {} active floats in the region\n\
                 • Temperature range: 4.2°C to 28.6°C\n\
                 • Salinity: 34.5 to 36.8 PSU\n\
                 • Last profile received {} hours ago\n\n\
                 Shall I create a comparative analysis chart?",
                f[0], f[1]
            )
        },
    },
    Template {
        ranges: &[GLOBAL_PROFILES, OCEAN_BASINS, HOURS_AGO],
        render: |f| {
            format!(
                "Excellent question! The ARGO network has collected over {} \
                 profiles globally. For your specific query:\n\n\
                 • Data quality: 98.5% validated\n\
                 • Coverage: {} ocean basins\n\
                 • Latest update: {} hours ago\n\n\
                 How would you like to visualize this data?",
                f[0], f[1], f[2]
            )
        },
    },
];

/// A generated reply together with the template index and the raw fill values,
/// so callers can assert range bounds without parsing the text.
#[derive(Debug, Clone)]
pub struct RenderedReply {
    pub template: usize,
    pub fills: Vec<u64>,
    pub text: String,
}

pub fn template_count() -> usize {
    TEMPLATES.len()
}

/// Fill ranges (half-open) of the given template, in placeholder order.
pub fn fill_ranges(template: usize) -> &'static [Range<u64>] {
    TEMPLATES[template].ranges
}

pub fn render(rng: &mut impl Rng) -> RenderedReply {
    let template = rng.random_range(0..TEMPLATES.len());
    let chosen = &TEMPLATES[template];
    let fills: Vec<u64> = chosen
        .ranges
        .iter()
        .map(|range| rng.random_range(range.clone()))
        .collect();
    RenderedReply {
        template,
        text: (chosen.render)(&fills),
        fills,
    }
}

/// Total over any input, including the empty string. The query is accepted
/// only so the call site reads naturally; see the module docs.
pub fn generate(_query: &str, rng: &mut impl Rng) -> String {
    render(rng).text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn exactly_three_templates_each_with_two_or_three_fills() {
        assert_eq!(template_count(), 3);
        for i in 0..template_count() {
            let n = fill_ranges(i).len();
            assert!((2..=3).contains(&n), "template {i} has {n} fills");
        }
    }

    #[test]
    fn query_text_does_not_influence_output() {
        let a = generate("temperature in the Pacific", &mut StdRng::seed_from_u64(7));
        let b = generate("", &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn replies_keep_multiline_bullet_formatting() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let reply = render(&mut rng);
            assert!(reply.text.contains("\n\n"));
            assert!(reply.text.contains('•'));
        }
    }

    #[test]
    fn seeded_rng_reproduces_the_same_reply() {
        let first = render(&mut StdRng::seed_from_u64(123));
        let second = render(&mut StdRng::seed_from_u64(123));
        assert_eq!(first.template, second.template);
        assert_eq!(first.fills, second.fills);
        assert_eq!(first.text, second.text);
    }
}
