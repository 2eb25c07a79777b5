use shoal_ir::{Aig, DepthNetwork, DepthView, Network, equivalent, write_aag};

use crate::Rule;
use crate::rules::distributivity::{self, DistributivityMatch};
use crate::rules;
use crate::test::helpers::*;

#[test]
fn test_find_shared_critical_signal() {
    let mut sb = shared_branches();
    let view = DepthView::new(&mut sb.aig);

    let m = distributivity::find(&view, sb.n.node()).unwrap();
    assert_eq!(m.shared, sb.s);
    assert_eq!(m.non_critical, [sb.d, sb.e]);
    assert!(!m.is_or);
}

#[test]
fn test_find_rejects_distinct_critical_signals() {
    let mut aig = distinct_branches();
    let view = DepthView::new(&mut aig);
    let n = view.pos()[0].node();
    assert_eq!(distributivity::find(&view, n), None);
}

#[test]
fn test_find_rejects_positive_branches() {
    let mut sb = shared_branches();
    let view = DepthView::new(&mut sb.aig);
    // x = s & d reads `s` without a complemented edge.
    assert_eq!(distributivity::find(&view, sb.x.node()), None);
}

#[test]
fn test_find_rejects_shallow_branches() {
    let mut aig = Aig::new();
    let [a, b, c] = [(); 3].map(|_| aig.create_pi());
    let x = aig.create_and(a, b);
    let y = aig.create_and(a, c);
    let n = aig.create_and(!x, !y);
    aig.create_po(n);

    let view = DepthView::new(&mut aig);
    assert_eq!(distributivity::find(&view, n.node()), None);
}

#[test]
fn test_find_rejects_branch_with_two_critical_fanins() {
    let mut aig = Aig::new();
    let [a, b, c, d, e, f, k] = [(); 7].map(|_| aig.create_pi());
    let ab = aig.create_and(a, b);
    let s = aig.create_and(ab, c);
    let de = aig.create_and(d, e);
    let g = aig.create_and(de, f);
    let x = aig.create_and(s, g);
    let y = aig.create_and(s, k);
    let n = aig.create_and(!x, !y);
    aig.create_po(n);

    let view = DepthView::new(&mut aig);
    assert!(view.is_on_critical_path(g.node()));
    assert_eq!(distributivity::find(&view, n.node()), None);
}

#[test]
fn test_build_respects_or_convention() {
    let mut aig = Aig::new();
    let [s, x, y] = [(); 3].map(|_| aig.create_pi());
    let m = DistributivityMatch { shared: s, non_critical: [x, y], is_or: false };
    let nand = m.build(&mut aig);
    let or = DistributivityMatch { is_or: true, ..m }.build(&mut aig);

    let term = aig.create_or(x, y);
    assert_eq!(nand, aig.create_nand(term, s));
    assert_eq!(or, aig.create_and(term, s));
    assert_eq!(or, !nand);
}

#[test]
fn test_apply_reduces_depth() {
    let mut sb = shared_branches();
    let original = sb.aig.clone();
    {
        let mut view = DepthView::new(&mut sb.aig);
        assert!(rules::apply(Rule::Distributivity, &mut view, sb.n.node()));
        view.update_levels();
        assert_eq!(view.depth(), 3);
    }
    for dead in [sb.n, sb.x, sb.y] {
        assert!(sb.aig.is_dead(dead.node()));
    }
    assert!(!sb.aig.is_dead(sb.s.node()));
    assert!(equivalent(&original, &sb.aig).unwrap());
}

#[test]
fn test_no_match_keeps_network_identical() {
    let mut aig = distinct_branches();
    let before = write_aag(&aig);
    let n = aig.pos()[0].node();
    {
        let mut view = DepthView::new(&mut aig);
        assert!(!rules::apply(Rule::Distributivity, &mut view, n));
    }
    assert_eq!(write_aag(&aig), before);
}
