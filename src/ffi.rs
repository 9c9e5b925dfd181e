use crate::algorithm::dijkstra::Dijkstra;
use crate::graph::directed::DirectedGraph;
use crate::graph::MutableGraph;
use crate::Error;

pub const SSSP_OK: i32 = 0;
pub const SSSP_ERR_NULL: i32 = -1;
pub const SSSP_ERR_INVALID_VERTEX: i32 = -2;
pub const SSSP_ERR_NEGATIVE_WEIGHT: i32 = -3;
pub const SSSP_ERR_OTHER: i32 = -4;

/// Distance reported for vertices the source cannot reach. A real distance
/// can also equal this value; check `SsspResult::reachable` to tell them apart.
pub const SSSP_UNREACHED: i64 = i64::MAX;
/// Predecessor reported for the source and unreached vertices
pub const SSSP_NO_PREDECESSOR: usize = usize::MAX;

#[repr(C)]
pub struct SsspGraph {
    graph: DirectedGraph<i64>,
}

/// Returns null if the vertex table cannot be allocated
#[no_mangle]
pub extern "C" fn sssp_graph_new(vertices: usize) -> *mut SsspGraph {
    match DirectedGraph::try_with_vertices(vertices) {
        Ok(graph) => Box::into_raw(Box::new(SsspGraph { graph })),
        Err(e) => {
            log::warn!("sssp_graph_new({}) failed: {}", vertices, e);
            std::ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn sssp_graph_add_edge(g: *mut SsspGraph, from: usize, to: usize, weight: i64) -> i32 {
    if g.is_null() {
        return SSSP_ERR_NULL;
    }
    match unsafe { &mut *g }.graph.add_edge(from, to, weight) {
        Ok(()) => SSSP_OK,
        Err(Error::InvalidVertex(_)) => SSSP_ERR_INVALID_VERTEX,
        Err(Error::NegativeWeight { .. }) => SSSP_ERR_NEGATIVE_WEIGHT,
        Err(_) => SSSP_ERR_OTHER,
    }
}

#[no_mangle]
pub extern "C" fn sssp_graph_free(g: *mut SsspGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

#[repr(C)]
pub struct SsspResult {
    pub distances: *mut i64,
    pub predecessors: *mut usize,
    /// 1 if the vertex was reached, 0 otherwise
    pub reachable: *mut u8,
    pub len: usize,
}

#[no_mangle]
pub extern "C" fn sssp_result_free(res: *mut SsspResult) {
    if !res.is_null() {
        unsafe {
            if !(*res).distances.is_null() {
                drop(Vec::from_raw_parts((*res).distances, (*res).len, (*res).len));
            }
            if !(*res).predecessors.is_null() {
                drop(Vec::from_raw_parts((*res).predecessors, (*res).len, (*res).len));
            }
            if !(*res).reachable.is_null() {
                drop(Vec::from_raw_parts((*res).reachable, (*res).len, (*res).len));
            }
            drop(Box::from_raw(res));
        }
    }
}

/// Returns null if `g` is null or the run fails
#[no_mangle]
pub extern "C" fn sssp_compute_shortest_paths(g: *const SsspGraph, source: usize) -> *mut SsspResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &(*g).graph };
    match Dijkstra::new().compute_with_stats::<i64, _>(graph, source) {
        Ok((result, _)) => {
            let len = result.distances.len();
            // Exact-capacity boxed slices so `from_raw_parts(ptr, len, len)` is sound
            let reachable: Box<[u8]> = result.distances.iter().map(|d| u8::from(d.is_some())).collect();
            let dist: Box<[i64]> = result
                .distances
                .into_iter()
                .map(|d| d.unwrap_or(SSSP_UNREACHED))
                .collect();
            let pred: Box<[usize]> = result
                .predecessors
                .into_iter()
                .map(|p| p.unwrap_or(SSSP_NO_PREDECESSOR))
                .collect();
            Box::into_raw(Box::new(SsspResult {
                distances: Box::into_raw(dist) as *mut i64,
                predecessors: Box::into_raw(pred) as *mut usize,
                reachable: Box::into_raw(reachable) as *mut u8,
                len,
            }))
        }
        Err(e) => {
            log::warn!("sssp_compute_shortest_paths failed: {}", e);
            std::ptr::null_mut()
        }
    }
}
