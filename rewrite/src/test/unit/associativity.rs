use shoal_ir::{Aig, DepthNetwork, DepthView, Network, equivalent};

use crate::Rule;
use crate::rules::{self, associativity};
use crate::test::helpers::*;

#[test]
fn test_find_regroups_shallow_leaves() {
    let mut chain = chain();
    let view = DepthView::new(&mut chain.aig);

    let m = associativity::find(&view, chain.g1.node()).unwrap();
    assert_eq!(m.critical, chain.ab);
    assert_eq!(m.non_critical, [chain.d, chain.c]);
}

#[test]
fn test_find_rejects_two_critical_grandchildren() {
    let mut chain = chain();
    let view = DepthView::new(&mut chain.aig);

    // Both fanins of `ab` are primary inputs on the critical path.
    assert_eq!(associativity::find(&view, chain.deep.node()), None);
}

#[test]
fn test_find_rejects_level_one_gate() {
    let mut chain = chain();
    let view = DepthView::new(&mut chain.aig);
    assert_eq!(associativity::find(&view, chain.ab.node()), None);
}

#[test]
fn test_find_rejects_late_sibling() {
    let mut aig = Aig::new();
    let [a, b, c, d, e, f] = [(); 6].map(|_| aig.create_pi());
    let ab = aig.create_and(a, b);
    let g = aig.create_and(ab, c);
    let de = aig.create_and(d, e);
    let h = aig.create_and(de, f);
    // `!h` is as late as `g`, so moving it down cannot help.
    let n = aig.create_and(g, !h);
    aig.create_po(n);

    let view = DepthView::new(&mut aig);
    assert!(view.is_on_critical_path(n.node()));
    assert_eq!(associativity::find(&view, n.node()), None);
}

#[test]
fn test_find_rejects_off_critical_gate() {
    let mut chain = chain();
    let extra = {
        let aig = &mut chain.aig;
        let p = aig.create_pi();
        let q = aig.create_pi();
        let pq = aig.create_and(p, q);
        let g = aig.create_and(pq, chain.c);
        let top = aig.create_and(g, chain.e);
        aig.create_po(top);
        top
    };

    let view = DepthView::new(&mut chain.aig);
    assert_eq!(view.level(extra.node()), 3);
    assert!(!view.is_on_critical_path(extra.node()));
    assert_eq!(associativity::find(&view, extra.node()), None);
}

#[test]
fn test_apply_reduces_depth() {
    let mut chain = chain();
    let original = chain.aig.clone();
    {
        let mut view = DepthView::new(&mut chain.aig);
        assert!(rules::apply(Rule::Associativity, &mut view, chain.g1.node()));
        view.update_levels();
        assert_eq!(view.depth(), 3);
    }
    assert!(chain.aig.is_dead(chain.g1.node()));
    assert!(chain.aig.is_dead(chain.deep.node()));
    assert!(!chain.aig.is_dead(chain.n.node()));
    assert!(equivalent(&original, &chain.aig).unwrap());
}

#[test]
fn test_apply_without_match_leaves_network_alone() {
    let mut chain = chain();
    let before = shoal_ir::write_aag(&chain.aig);
    {
        let mut view = DepthView::new(&mut chain.aig);
        assert!(!rules::apply(Rule::Associativity, &mut view, chain.deep.node()));
    }
    assert_eq!(shoal_ir::write_aag(&chain.aig), before);
    assert_eq!(chain.aig.num_gates(), 4);
}
