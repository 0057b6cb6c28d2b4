#[cfg(test)]
mod test {
    use crate::core::{Move, Tower};
    use crate::state_graph::*;
    use crate::test::test_util::{saturated_graph, tower};
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn new_graph_is_empty_until_seeded() {
        let mut graph = StateGraph::new(3, 3);
        assert_eq!(graph.phase(), GraphPhase::Empty);
        assert!(!graph.step());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.phase(), GraphPhase::Empty);
        assert!(matches!(populate_layer(&mut graph), PopulateResult::Unseeded));
    }

    #[test]
    fn add_origin_seeds_single_node() {
        let mut graph = StateGraph::new(3, 3);
        let origin_id = graph.add_origin();

        assert_eq!(graph.phase(), GraphPhase::Seeded);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.frontier_len(), 1);
        assert_eq!(graph.get_state(origin_id), Some(&Tower::origin(3, 3)));
        assert_eq!(graph.node_labels(), vec!["_321__".to_string()]);
    }

    #[test]
    fn add_origin_resets_previous_run() {
        let mut graph = saturated_graph(2, 3);
        assert_eq!(graph.phase(), GraphPhase::Saturated);

        graph.add_origin();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.phase(), GraphPhase::Seeded);
        assert!(graph.step());
    }

    #[test]
    fn first_layer_discovers_origin_neighbours() {
        let mut graph = StateGraph::new(3, 3);
        let origin_id = graph.add_origin();

        let PopulateResult::Expanded(stats) = populate_layer(&mut graph) else {
            panic!("expected the first layer to expand");
        };
        assert_eq!(
            stats,
            LayerStats {
                layer: 1,
                expanded: 1,
                nodes_added: 2,
                edges_added: 2,
            }
        );
        assert_eq!(graph.phase(), GraphPhase::Expanding);

        let origin = graph.node(origin_id).unwrap();
        assert_eq!(origin.degree(), 2);
        let mut neighbour_labels: Vec<String> = origin
            .neighbour_ids()
            .map(|id| graph.get_state(id).unwrap().to_string())
            .collect();
        neighbour_labels.sort();
        assert_eq!(neighbour_labels, vec!["_32_1_", "_32__1"]);
        for id in origin.neighbour_ids() {
            assert_eq!(graph.node(id).unwrap().meta.layer, 1);
        }
    }

    #[test]
    fn no_disks_gives_single_node() {
        for rods in 0..5 {
            let graph = saturated_graph(0, rods);
            assert_eq!(graph.node_count(), 1, "rods: {}", rods);
            assert_eq!(graph.edge_count(), 0, "rods: {}", rods);
            assert_eq!(graph.layer_count(), 1);
        }
    }

    #[test]
    fn fewer_than_two_rods_gives_single_node() {
        for disks in 0..4 {
            for rods in 0..2 {
                let graph = saturated_graph(disks, rods);
                assert_eq!(graph.node_count(), 1);
                assert_eq!(graph.edge_count(), 0);
            }
        }
    }

    #[test]
    fn one_disk_two_rods() {
        let graph = saturated_graph(1, 2);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_labels(), vec![("_1_".to_string(), "__1".to_string())]);
    }

    #[test]
    fn two_rods_only_ever_move_the_smallest_disk() {
        // the larger disk is always covered or alone opposite the smaller one
        for disks in 1..6 {
            let graph = saturated_graph(disks, 2);
            assert_eq!(graph.node_count(), 2, "disks: {}", disks);
            assert_eq!(graph.edge_count(), 1, "disks: {}", disks);
        }
        let mut labels = saturated_graph(2, 2).node_labels();
        labels.sort();
        assert_eq!(labels, vec!["_21_", "_2_1"]);
    }

    #[test]
    fn classic_puzzle_has_27_states() {
        let graph = saturated_graph(3, 3);
        assert_eq!(graph.node_count(), 27);
        assert_eq!(graph.edge_count(), 39);
        assert_eq!(graph.phase(), GraphPhase::Saturated);

        let max_degree = 3 * (3 - 1);
        for node in graph.nodes() {
            assert!(node.degree() >= 2, "{} has degree {}", node.label(), node.degree());
            assert!(node.degree() <= max_degree);
        }

        let corners: Vec<String> = graph
            .nodes()
            .filter(|node| node.degree() == 2)
            .map(|node| node.label())
            .collect();
        assert_eq!(corners.len(), 3);
        for corner in ["_321__", "__321_", "___321"] {
            assert!(corners.contains(&corner.to_string()), "missing {}", corner);
        }
    }

    #[test]
    fn three_rods_reach_every_assignment() {
        for disks in 0..6 {
            let graph = saturated_graph(disks, 3);
            let states = 3usize.pow(disks as u32);
            assert_eq!(graph.node_count(), states, "disks: {}", disks);
            assert_eq!(graph.edge_count(), 3 * (states - 1) / 2, "disks: {}", disks);
        }
    }

    #[test]
    fn node_count_never_exceeds_assignments() {
        for rods in 2..6 {
            for disks in 0..5 {
                let graph = saturated_graph(disks, rods);
                assert!(graph.node_count() <= rods.pow(disks as u32));
                for node in graph.nodes() {
                    assert!(node.degree() <= rods * (rods - 1));
                }
            }
        }
    }

    #[test]
    fn step_stays_false_after_saturation() {
        let mut graph = saturated_graph(3, 4);
        let nodes = graph.node_count();
        let edges = graph.edge_count();
        let layers = graph.layer_count();
        for _ in 0..3 {
            assert!(!graph.step());
            assert!(matches!(populate_layer(&mut graph), PopulateResult::Saturated));
        }
        assert_eq!(graph.node_count(), nodes);
        assert_eq!(graph.edge_count(), edges);
        assert_eq!(graph.layer_count(), layers);
    }

    #[test]
    fn edges_are_symmetric() {
        assert_eq!(Edge::new(3, 7), Edge::new(7, 3));
        assert_ne!(Edge::new(3, 7), Edge::new(3, 8));

        let mut edges = HashSet::new();
        assert!(edges.insert(Edge::new(1, 2)));
        assert!(!edges.insert(Edge::new(2, 1)));

        let edge = Edge::new(4, 9);
        assert_eq!(edge.endpoints(), (4, 9));
        assert_eq!(Edge::new(9, 4).endpoints(), (4, 9));
        assert_eq!(edge.other(4), Some(9));
        assert_eq!(edge.other(9), Some(4));
        assert_eq!(edge.other(5), None);
        assert!(edge.touches(9));
    }

    #[test]
    fn node_edges_are_registered_once() {
        let mut meta = NodeMeta::new(0);
        assert!(meta.add_edge(Edge::new(0, 1)));
        assert!(!meta.add_edge(Edge::new(1, 0)));
        assert_eq!(meta.edges.len(), 1);
    }

    #[test]
    fn node_meta_is_only_found_for_known_nodes() {
        let mut graph = StateGraph::new(2, 3);
        let origin = graph.add_origin();
        assert!(graph.get_node_meta_mut(origin).is_some());
        assert!(graph.get_node_meta_mut(origin + 1).is_none());
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    #[should_panic(expected = "touches unknown node 5")]
    fn edge_to_unknown_node_panics() {
        let mut graph = StateGraph::new(2, 3);
        let origin = graph.add_origin();
        graph.insert_edge(Edge::new(origin, 5));
    }

    #[test]
    fn every_edge_is_a_legal_move_both_ways() {
        let graph = saturated_graph(3, 4);
        for edge in graph.edges() {
            let from = graph.get_state(edge.from).unwrap();
            let to = graph.get_state(edge.to).unwrap();
            assert!(from.neighbours().contains(to));
            assert!(to.neighbours().contains(from));
        }
    }

    #[test]
    fn node_edges_match_graph_edges() {
        let graph = saturated_graph(3, 3);
        let total_degree: usize = graph.nodes().map(|node| node.degree()).sum();
        assert_eq!(total_degree, 2 * graph.edge_count());

        for node in graph.nodes() {
            assert_eq!(graph.node_id(node.tower), Some(node.id));
            for edge in &node.meta.edges {
                assert!(edge.touches(node.id));
                assert!(graph.edges().contains(edge));
            }
        }
    }

    #[test]
    fn nodes_compare_by_tower() {
        let graph = saturated_graph(2, 3);
        let first = graph.node(0).unwrap();
        let again = graph.node(0).unwrap();
        let other = graph.node(1).unwrap();
        assert_eq!(first, again);
        assert_ne!(first, other);

        let distinct: HashSet<_> = graph.nodes().collect();
        assert_eq!(distinct.len(), graph.node_count());
    }

    #[test]
    fn random_walks_stay_inside_the_saturated_graph() {
        let graph = saturated_graph(4, 4);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let mut current = Tower::origin(4, 4);
            for _ in 0..200 {
                let moves: Vec<Move> = current.legal_moves();
                let Some(&action) = moves.choose(&mut rng) else {
                    panic!("{} has no legal moves", current);
                };
                let next = current.apply_move(action).unwrap();

                let from_id = graph.node_id(&current).unwrap();
                let to_id = graph.node_id(&next).unwrap();
                assert!(graph.node(from_id).unwrap().meta.edges.contains(&Edge::new(to_id, from_id)));
                current = next;
            }
        }
    }

    #[test]
    fn layers_record_discovery_depth() {
        let graph = saturated_graph(2, 3);
        let depth_of = |label: &str| {
            let id = graph.node_id(&tower(label)).unwrap();
            graph.node(id).unwrap().meta.layer
        };
        assert_eq!(depth_of("_21__"), 0);
        assert_eq!(depth_of("_2_1_"), 1);
        assert_eq!(depth_of("_2__1"), 1);
        assert_eq!(depth_of("__2_1"), 2);
        assert_eq!(depth_of("___21"), 3);
    }
}
