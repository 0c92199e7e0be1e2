use rand::rngs::StdRng;
use rand::SeedableRng;

use ocean_assist::templates;

#[test]
fn every_fill_stays_in_its_template_range_over_ten_thousand_renders() {
    let mut rng = StdRng::seed_from_u64(0xA5CE);
    let mut seen = vec![0usize; templates::template_count()];

    for _ in 0..10_000 {
        let reply = templates::render(&mut rng);
        seen[reply.template] += 1;

        let ranges = templates::fill_ranges(reply.template);
        assert_eq!(reply.fills.len(), ranges.len());
        for (fill, range) in reply.fills.iter().zip(ranges) {
            assert!(
                range.contains(fill),
                "template {} fill {fill} outside {range:?}",
                reply.template
            );
        }
    }

    // Uniform choice over three templates: each one shows up plenty of times
    // in ten thousand draws.
    for (template, count) in seen.iter().enumerate() {
        assert!(*count > 2_000, "template {template} drawn only {count} times");
    }
}

#[test]
fn filled_values_appear_verbatim_in_the_text() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..100 {
        let reply = templates::render(&mut rng);
        for fill in &reply.fills {
            assert!(reply.text.contains(&fill.to_string()));
        }
    }
}
