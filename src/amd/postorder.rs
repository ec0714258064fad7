use super::quotient::AssemblyTree;

/// Points every non-principal variable directly at the element it
/// was eliminated with.  Dense variables have no parent and are left
/// alone.
pub(crate) fn compress_paths(tree: &mut AssemblyTree) {
    let n = tree.nv.len();
    for i in 0..n {
        if tree.nv[i] != 0 {
            continue;
        }
        let Some(mut j) = tree.parent[i] else {
            continue;
        };
        while tree.nv[j] == 0 {
            j = tree.parent[j].expect("non-principal variable without an element ancestor");
        }
        let e = j;

        let mut j = i;
        while tree.nv[j] == 0 {
            let jnext = tree.parent[j];
            tree.parent[j] = Some(e);
            match jnext {
                Some(jn) => j = jn,
                None => break,
            }
        }
    }
}

/// Postorder of the assembly tree.
///
/// Only principal nodes (`nv > 0`) take part.  Children are visited in
/// increasing index order, except that the child with the largest
/// front is visited last.  Roots are taken in increasing index order.
pub(crate) fn postorder(tree: &AssemblyTree) -> Vec<usize> {
    let n = tree.nv.len();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for j in 0..n {
        if tree.nv[j] > 0 {
            if let Some(p) = tree.parent[j] {
                children[p].push(j);
            }
        }
    }

    for kids in children.iter_mut().filter(|k| k.len() > 1) {
        // last child of maximal front size
        let mut big = 0;
        for (pos, &f) in kids.iter().enumerate() {
            if tree.fsize[f] >= tree.fsize[kids[big]] {
                big = pos;
            }
        }
        let f = kids.remove(big);
        kids.push(f);
    }

    let mut order = Vec::with_capacity(n);
    let mut stack: Vec<(usize, bool)> = Vec::new();
    for root in (0..n).filter(|&i| tree.parent[i].is_none() && tree.nv[i] > 0) {
        stack.push((root, false));
        while let Some((i, expanded)) = stack.pop() {
            if expanded || children[i].is_empty() {
                order.push(i);
            } else {
                stack.push((i, true));
                stack.extend(children[i].iter().rev().map(|&c| (c, false)));
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amd::quotient::NodeStatus;

    fn tree(parent: Vec<Option<usize>>, nv: Vec<usize>, fsize: Vec<usize>) -> AssemblyTree {
        let status = nv
            .iter()
            .map(|&v| {
                if v > 0 {
                    NodeStatus::Element
                } else {
                    NodeStatus::Merged
                }
            })
            .collect();
        AssemblyTree {
            parent,
            nv,
            fsize,
            status,
        }
    }

    #[test]
    fn test_compress_paths() {
        // 0 -> 1 -> 2 (element), 3 dense
        let mut t = tree(
            vec![Some(1), Some(2), None, None],
            vec![0, 0, 3, 0],
            vec![0, 0, 3, 0],
        );
        compress_paths(&mut t);
        assert_eq!(t.parent, vec![Some(2), Some(2), None, None]);
    }

    #[test]
    fn test_postorder_largest_front_last() {
        // root 4 with children 0, 1, 2; child 1 has the largest front
        // and 3 hangs below 0
        let t = tree(
            vec![Some(4), Some(4), Some(4), Some(0), None],
            vec![1, 1, 1, 1, 1],
            vec![2, 5, 2, 1, 1],
        );
        assert_eq!(postorder(&t), vec![3, 0, 2, 1, 4]);
    }

    #[test]
    fn test_postorder_ties_pick_last() {
        let t = tree(
            vec![Some(3), Some(3), Some(3), None, None],
            vec![1, 1, 1, 1, 1],
            vec![4, 4, 1, 1, 1],
        );
        // 1 is the last child of maximal size and is moved to the end
        assert_eq!(postorder(&t), vec![0, 2, 1, 3, 4]);
    }
}
