#![cfg(feature = "ffi")]

use lazy_sssp::ffi::*;

#[test]
fn test_c_api_round_trip() {
    let g = sssp_graph_new(4);
    for (from, to, weight) in [(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5)] {
        assert_eq!(sssp_graph_add_edge(g, from, to, weight), SSSP_OK);
    }
    assert_eq!(sssp_graph_add_edge(g, 0, 9, 1), SSSP_ERR_INVALID_VERTEX);
    assert_eq!(sssp_graph_add_edge(g, 0, 1, -2), SSSP_ERR_NEGATIVE_WEIGHT);
    assert_eq!(sssp_graph_add_edge(std::ptr::null_mut(), 0, 1, 1), SSSP_ERR_NULL);

    assert!(sssp_compute_shortest_paths(g, 7).is_null());

    let res = sssp_compute_shortest_paths(g, 2);
    assert!(!res.is_null());
    let unreached = unsafe { *(*res).distances };
    assert_eq!(unreached, SSSP_UNREACHED);
    sssp_result_free(res);

    let res = sssp_compute_shortest_paths(g, 0);
    assert!(!res.is_null());
    let (distances, predecessors) = unsafe {
        let r = &*res;
        (
            std::slice::from_raw_parts(r.distances, r.len).to_vec(),
            std::slice::from_raw_parts(r.predecessors, r.len).to_vec(),
        )
    };
    assert_eq!(distances, vec![0, 1, 3, 6]);
    assert_eq!(predecessors, vec![SSSP_NO_PREDECESSOR, 0, 1, 1]);
    sssp_result_free(res);

    sssp_graph_free(g);
}

#[test]
fn test_reachable_flags_disambiguate_max_distance() {
    let g = sssp_graph_new(3);
    assert!(!g.is_null());
    assert_eq!(sssp_graph_add_edge(g, 0, 1, i64::MAX), SSSP_OK);

    let res = sssp_compute_shortest_paths(g, 0);
    assert!(!res.is_null());
    let (distances, reachable) = unsafe {
        let r = &*res;
        (
            std::slice::from_raw_parts(r.distances, r.len).to_vec(),
            std::slice::from_raw_parts(r.reachable, r.len).to_vec(),
        )
    };
    // Vertex 1 really is i64::MAX away; vertex 2 is not reached at all
    assert_eq!(distances, vec![0, i64::MAX, SSSP_UNREACHED]);
    assert_eq!(reachable, vec![1, 1, 0]);
    sssp_result_free(res);

    sssp_graph_free(g);
}

#[test]
fn test_graph_new_fails_cleanly_on_huge_vertex_count() {
    assert!(sssp_graph_new(usize::MAX).is_null());
}
