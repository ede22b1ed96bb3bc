//! Type inference for terms. Every syntactic form has exactly one rule, so
//! this is a single recursive match over the tree.

use stlc_tree::{Field, Term, Type};

use crate::context::Ctx;
use crate::error::TypeError;
use crate::sub::{join, subtype_of};

pub trait Infer {
    fn infer(&self, ctx: &Ctx) -> Result<Type, TypeError>;
}

/// Checks `term` under `ctx` and returns its type.
///
/// ```md
/// Γ ⊢ t : T
/// ```
pub fn type_of(term: &Term, ctx: &Ctx) -> Result<Type, TypeError> {
    term.infer(ctx)
}

impl Infer for Term {
    fn infer(&self, ctx: &Ctx) -> Result<Type, TypeError> {
        match self {
            Self::Var(name) => ctx
                .lookup(name)
                .ok_or_else(|| TypeError::UnknownVariable(name.clone())),

            Self::Abs(param, param_ty, body) => {
                let body_ty = body.infer(&ctx.extend(param, param_ty.clone()))?;
                Ok(Type::func(param_ty.clone(), body_ty))
            }

            Self::App(fun, arg) => match fun.infer(ctx)? {
                Type::Function(from, to) => {
                    let arg_ty = arg.infer(ctx)?;
                    if subtype_of(&arg_ty, &from) {
                        Ok(*to)
                    } else {
                        Err(TypeError::ArgumentMismatch {
                            expected: *from,
                            found: arg_ty,
                        })
                    }
                }
                other => Err(TypeError::NonAbstraction(other)),
            },

            Self::True | Self::False => Ok(Type::Boolean),

            Self::If(cond, then, els) => {
                match cond.infer(ctx)? {
                    Type::Boolean => {}
                    other => return Err(TypeError::NonBooleanCondition(other)),
                }
                Ok(join(&then.infer(ctx)?, &els.infer(ctx)?))
            }

            Self::Zero => Ok(Type::Natural),

            Self::Succ(n) | Self::Pred(n) => expect_natural(n, ctx).map(|()| Type::Natural),
            Self::IsZero(n) => expect_natural(n, ctx).map(|()| Type::Boolean),

            Self::Unit => Ok(Type::Unit),

            // The first operand is checked but its type is unconstrained.
            Self::Seq(first, second) => {
                first.infer(ctx)?;
                second.infer(ctx)
            }

            // Ascription is not checked against the inner type; it only
            // overrides it. The inner term still has to be well typed.
            Self::Ascribe(term, ty) => {
                term.infer(ctx)?;
                Ok(ty.clone())
            }

            Self::Let(name, bound, body) => {
                let bound_ty = bound.infer(ctx)?;
                body.infer(&ctx.extend(name, bound_ty))
            }

            Self::Project(object, field) => match (object.infer(ctx)?, field) {
                (Type::Product(left, _), Field::Index(1)) => Ok(*left),
                (Type::Product(_, right), Field::Index(2)) => Ok(*right),
                (Type::Product(..), Field::Index(index)) => {
                    Err(TypeError::OutOfBoundsProjection { index: *index, size: 2 })
                }
                (Type::Tuple(members), Field::Index(index)) => {
                    match index.checked_sub(1).and_then(|i| members.get(i)) {
                        Some(ty) => Ok(ty.clone()),
                        None => Err(TypeError::OutOfBoundsProjection {
                            index: *index,
                            size: members.len(),
                        }),
                    }
                }
                (Type::Record(members), Field::Label(label)) => members
                    .get(label)
                    .cloned()
                    .ok_or_else(|| TypeError::UnknownField(label.clone())),
                (other, Field::Index(_)) => Err(TypeError::NotAProduct(other)),
                (other, Field::Label(_)) => Err(TypeError::NotARecord(other)),
            },

            Self::Pair(left, right) => {
                Ok(Type::product(left.infer(ctx)?, right.infer(ctx)?))
            }

            Self::Tuple(members) => Ok(Type::Tuple(
                members.iter().map(|m| m.infer(ctx)).collect::<Result<_, _>>()?,
            )),

            Self::Record(members) => Ok(Type::Record(
                members
                    .iter()
                    .map(|(label, term)| Ok((label.clone(), term.infer(ctx)?)))
                    .collect::<Result<_, TypeError>>()?,
            )),

            Self::Inl(_, None) | Self::Inr(_, None) => Err(TypeError::UnannotatedInjection),

            Self::Inl(term, Some(annot)) => check_injection(term, annot, ctx, Side::Left),
            Self::Inr(term, Some(annot)) => check_injection(term, annot, ctx, Side::Right),

            Self::SumCase(scrutinee, left, right) => {
                let (left_ty, right_ty) = match scrutinee.infer(ctx)? {
                    Type::Sum(l, r) => (*l, *r),
                    other => return Err(TypeError::NotASum(other)),
                };
                let left_arm = left.body.infer(&ctx.extend(&left.param, left_ty))?;
                let right_arm = right.body.infer(&ctx.extend(&right.param, right_ty))?;
                if left_arm == right_arm {
                    Ok(left_arm)
                } else {
                    Err(TypeError::ArmMismatch { left: left_arm, right: right_arm })
                }
            }

            Self::VarCase(scrutinee, clauses) => {
                let arms = match scrutinee.infer(ctx)? {
                    Type::Variant(arms) => arms,
                    other => return Err(TypeError::NotAVariant(other)),
                };
                for label in clauses.keys() {
                    if !arms.contains_key(label) {
                        return Err(TypeError::UnknownClause(label.clone()));
                    }
                }
                let mut result = None;
                for (label, arm_ty) in &arms {
                    let clause = clauses
                        .get(label)
                        .ok_or_else(|| TypeError::MissingClause(label.clone()))?;
                    let body_ty = clause
                        .body
                        .infer(&ctx.extend(&clause.param, arm_ty.clone()))?;
                    match &result {
                        None => result = Some(body_ty),
                        Some(seen) if *seen == body_ty => {}
                        Some(seen) => {
                            return Err(TypeError::ArmMismatch {
                                left: seen.clone(),
                                right: body_ty,
                            })
                        }
                    }
                }
                // A variant with no clauses has no arm to take a type from.
                result.ok_or(TypeError::NotAVariant(Type::Variant(arms)))
            }

            Self::Nil(elem) => Ok(Type::list(elem.clone())),

            Self::Cons(elem, head, tail) => {
                let head_ty = head.infer(ctx)?;
                if head_ty != *elem {
                    return Err(TypeError::ArgumentMismatch {
                        expected: elem.clone(),
                        found: head_ty,
                    });
                }
                let expected = Type::list(elem.clone());
                let tail_ty = tail.infer(ctx)?;
                if tail_ty != expected {
                    return Err(TypeError::ArgumentMismatch {
                        expected,
                        found: tail_ty,
                    });
                }
                Ok(expected)
            }

            Self::IsNil(elem, arg) => expect_list(elem, arg, ctx).map(|()| Type::Boolean),
            Self::Head(elem, arg) => expect_list(elem, arg, ctx).map(|()| elem.clone()),
            Self::Tail(elem, arg) => {
                expect_list(elem, arg, ctx).map(|()| Type::list(elem.clone()))
            }
        }
    }
}

enum Side {
    Left,
    Right,
}

fn check_injection(
    term: &Term,
    annot: &Type,
    ctx: &Ctx,
    side: Side,
) -> Result<Type, TypeError> {
    let (left, right) = match annot {
        Type::Sum(left, right) => (left, right),
        other => return Err(TypeError::NotASum(other.clone())),
    };
    let expected = match side {
        Side::Left => left,
        Side::Right => right,
    };
    let found = term.infer(ctx)?;
    if found == **expected {
        Ok(annot.clone())
    } else {
        Err(TypeError::BadInjection {
            expected: (**expected).clone(),
            found,
        })
    }
}

fn expect_natural(n: &Term, ctx: &Ctx) -> Result<(), TypeError> {
    match n.infer(ctx)? {
        Type::Natural => Ok(()),
        other => Err(TypeError::NonNaturalOperand(other)),
    }
}

fn expect_list(elem: &Type, arg: &Term, ctx: &Ctx) -> Result<(), TypeError> {
    let arg_ty = arg.infer(ctx)?;
    if arg_ty == Type::list(elem.clone()) {
        Ok(())
    } else {
        Err(TypeError::NotAList(arg_ty))
    }
}
