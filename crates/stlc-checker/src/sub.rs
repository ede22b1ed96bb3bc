//! The structural subtype relation and its lattice operations. `join` and
//! `meet` are what lets the checker give a single type to an `if` whose
//! arms disagree but share a supertype.

use stlc_tree::Type;

use crate::error::TypeError;

/// Decides `sub <: sup`.
///
/// ```md
/// S-REFL   T <: T
/// S-TOP    T <: Top
/// S-RCD    {l ∈ T} ⊆ {l ∈ S}   S.l <: T.l   ⊢  S <: T
/// S-ARROW  T1 <: S1   S2 <: T2              ⊢  S1 → S2 <: T1 → T2
/// ```
pub fn subtype_of(sub: &Type, sup: &Type) -> bool {
    if sup == &Type::Top {
        return true;
    }
    if sub == sup {
        return true;
    }

    match (sub, sup) {
        // Width: extra fields in `sub` are ignored. Depth: shared fields
        // relate recursively. Permutation: the label maps compare by key.
        (Type::Record(sub_members), Type::Record(sup_members)) => {
            sup_members.iter().all(|(label, sup_ty)| {
                sub_members
                    .get(label)
                    .map_or(false, |sub_ty| subtype_of(sub_ty, sup_ty))
            })
        }

        (Type::Function(sub_from, sub_to), Type::Function(sup_from, sup_to)) => {
            subtype_of(sup_from, sub_from) && subtype_of(sub_to, sup_to)
        }

        _ => false,
    }
}

/// The least common supertype of two types. Total: unrelated types join at
/// `Top`.
pub fn join(a: &Type, b: &Type) -> Type {
    if subtype_of(b, a) {
        return a.clone();
    }
    if subtype_of(a, b) {
        return b.clone();
    }

    match (a, b) {
        (Type::Record(a_members), Type::Record(b_members)) => {
            let members = a_members
                .iter()
                .filter_map(|(label, a_ty)| {
                    b_members.get(label).map(|b_ty| (label.clone(), join(a_ty, b_ty)))
                })
                .collect();
            Type::Record(members)
        }

        (Type::Function(a_from, a_to), Type::Function(b_from, b_to)) => {
            // The shared domain is the meet of the two domains; when no
            // common subtype exists the arrows only share Top, so the
            // failure stops here instead of propagating.
            match meet(a_from, b_from) {
                Ok(from) => Type::func(from, join(a_to, b_to)),
                Err(_) => Type::Top,
            }
        }

        _ => Type::Top,
    }
}

/// The greatest common subtype of two types, when one exists. There is no
/// rule for two arrows, so their meet fails unless one subsumes the other.
pub fn meet(a: &Type, b: &Type) -> Result<Type, TypeError> {
    if subtype_of(a, b) {
        return Ok(a.clone());
    }
    if subtype_of(b, a) {
        return Ok(b.clone());
    }

    match (a, b) {
        // The union of both label sets: shared labels meet recursively,
        // the rest pass through unchanged.
        (Type::Record(a_members), Type::Record(b_members)) => {
            let mut members = a_members.clone();
            for (label, b_ty) in b_members {
                let merged = match members.get(label) {
                    Some(a_ty) => meet(a_ty, b_ty)?,
                    None => b_ty.clone(),
                };
                members.insert(label.clone(), merged);
            }
            Ok(Type::Record(members))
        }

        _ => Err(TypeError::NoMeet(a.clone(), b.clone())),
    }
}
