use gesturematch::lowlevel::{cloud_distance, cloud_match, lower_bounds, offset_step};
use gesturematch::{CloudParams, Point, PointCloud, SearchStats};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_stroke(rng: &mut StdRng, count: usize) -> Vec<Point> {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut pts = Vec::with_capacity(count);
    for _ in 0..count {
        x += rng.random_range(-20.0..20.0);
        y += rng.random_range(-20.0..20.0);
        pts.push(Point::single(x, y));
    }
    pts
}

fn random_cloud(rng: &mut StdRng, name: &str) -> PointCloud {
    let count = rng.random_range(5..60);
    PointCloud::new(name, &random_stroke(rng, count), &CloudParams::default()).unwrap()
}

#[test]
fn ineffective_limit_does_not_change_distance() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let a = random_cloud(&mut rng, "a");
        let b = random_cloud(&mut rng, "b");
        for start in [0usize, 5, 17, 31] {
            let exact = cloud_distance(a.points(), b.points(), start, f64::INFINITY);
            let loose = cloud_distance(a.points(), b.points(), start, exact * 2.0 + 1.0);
            assert_eq!(exact, loose);
        }
    }
}

#[test]
fn abandoned_evaluations_never_undercut_the_limit() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let a = random_cloud(&mut rng, "a");
        let b = random_cloud(&mut rng, "b");
        let exact = cloud_distance(a.points(), b.points(), 0, f64::INFINITY);
        let limit = exact * 0.5;
        let partial = cloud_distance(a.points(), b.points(), 0, limit);
        assert!(partial >= limit);
        assert!(partial <= exact);
    }
}

#[test]
fn pruned_match_lies_between_sampled_offsets() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..15 {
        let candidate = random_cloud(&mut rng, "");
        let template = random_cloud(&mut rng, "t");
        let n = candidate.len();
        let step = offset_step(n);

        let mut stats = SearchStats::default();
        let best = cloud_match(&candidate, &template, f64::INFINITY, &mut stats);

        let mut sampled_min = f64::INFINITY;
        for start in (0..n).step_by(step) {
            sampled_min = sampled_min
                .min(cloud_distance(candidate.points(), template.points(), start, f64::INFINITY))
                .min(cloud_distance(template.points(), candidate.points(), start, f64::INFINITY));
        }
        let forward_zero =
            cloud_distance(candidate.points(), template.points(), 0, f64::INFINITY);

        assert!(best >= sampled_min);
        assert!(best <= forward_zero);
        assert_eq!(
            stats.exact_evaluations + stats.pruned_offsets,
            2 * lower_bounds(&candidate, &template, step).len()
        );
    }
}

#[test]
fn tight_running_best_prunes_work() {
    let mut rng = StdRng::seed_from_u64(99);
    let candidate = random_cloud(&mut rng, "");
    let template = random_cloud(&mut rng, "t");

    let mut open = SearchStats::default();
    let best = cloud_match(&candidate, &template, f64::INFINITY, &mut open);

    let mut tight = SearchStats::default();
    let again = cloud_match(&candidate, &template, best, &mut tight);
    assert_eq!(again, best);
    assert!(tight.exact_evaluations <= open.exact_evaluations);
}
