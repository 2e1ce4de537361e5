//! Backtracking search over goal trees.
//!
//! Depth-first, chronological backtracking. Entity variables enumerate
//! candidates in fact insertion order; numeric variables live in a
//! finite-domain store that is cloned at every disjunction branch so a
//! wiped-out branch never corrupts its siblings. Solution order is
//! deterministic for repeated identical queries.

use crate::goal::{Arg, Goal, NumArg, Pool, Pred};
use crate::{QueryError, QueryResult, Solution};
use log::{debug, trace};
use quire_core::{ObjectId, Role};
use quire_facts::FactStore;
use quire_fd::{Constraint, DomainStore, VarId, DEFAULT_MAX, DEFAULT_MIN};
use quire_relation::{Checker, Evaluator};

/// Tunable search limits.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Nodes the search may expand before failing with `BudgetExhausted`.
    /// Guards termination against malformed recursive data.
    pub node_budget: usize,
    /// Bounds given to numeric variables the goal leaves unconstrained.
    pub default_bounds: (i64, i64),
    /// Screen every candidate solution against mutual exclusion before
    /// emitting it.
    pub enforce_exclusion: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            node_budget: 100_000,
            default_bounds: (DEFAULT_MIN, DEFAULT_MAX),
            enforce_exclusion: true,
        }
    }
}

/// Search state carried down one branch. Cloning it is what isolates
/// branches from each other.
#[derive(Debug, Clone, Default)]
struct State {
    /// Entity bindings in first-mention order.
    entities: Vec<(String, ObjectId)>,
    /// Numeric variables in first-mention order.
    nums: Vec<(String, VarId)>,
    doms: DomainStore,
}

impl State {
    fn entity(&self, name: &str) -> Option<ObjectId> {
        self.entities
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, obj)| *obj)
    }

    fn bind(&mut self, name: &str, obj: ObjectId) {
        self.entities.push((name.to_string(), obj));
    }

    fn num_var(&mut self, name: &str, bounds: (i64, i64)) -> VarId {
        if let Some((_, var)) = self.nums.iter().find(|(n, _)| n == name) {
            return *var;
        }
        // Inverted custom bounds fall back to the built-in defaults.
        let var = match self.doms.new_var_in(bounds.0, bounds.1) {
            Ok(var) => var,
            Err(_) => self.doms.new_var(),
        };
        self.nums.push((name.to_string(), var));
        var
    }
}

/// Bookkeeping shared across the whole search.
struct Ctx {
    solutions: Vec<Solution>,
    target: usize,
    nodes_left: usize,
    limit: usize,
}

impl Ctx {
    fn spend(&mut self) -> QueryResult<()> {
        if self.nodes_left == 0 {
            return Err(QueryError::BudgetExhausted { limit: self.limit });
        }
        self.nodes_left -= 1;
        Ok(())
    }
}

/// The query engine.
pub struct Solver<'s> {
    checker: Checker<'s>,
    options: SolveOptions,
}

impl<'s> Solver<'s> {
    /// Create a solver over a loaded store with default options.
    pub fn new(store: &'s FactStore) -> QueryResult<Self> {
        Self::with_options(store, SolveOptions::default())
    }

    /// Create a solver with explicit options.
    pub fn with_options(store: &'s FactStore, options: SolveOptions) -> QueryResult<Self> {
        Ok(Self {
            checker: Checker::new(store)?,
            options,
        })
    }

    fn eval(&self) -> &Evaluator<'s> {
        self.checker.evaluator()
    }

    /// Find up to `n` satisfying assignments for a goal.
    ///
    /// Returns fewer than `n` when the search space is exhausted; a
    /// shortfall is not an error. Domain wipe-outs drive backtracking and
    /// never surface.
    pub fn solve(&self, goal: &Goal, n: usize) -> QueryResult<Vec<Solution>> {
        debug!("solve: requesting up to {} solutions", n);
        let mut ctx = Ctx {
            solutions: Vec::new(),
            target: n,
            nodes_left: self.options.node_budget,
            limit: self.options.node_budget,
        };
        if n > 0 {
            self.search(State::default(), &[goal], &mut ctx)?;
        }
        debug!("solve: found {} solutions", ctx.solutions.len());
        Ok(ctx.solutions)
    }

    /// Directly evaluate a fully-bound predicate as a yes/no check.
    pub fn holds(&self, pred: &Pred) -> QueryResult<bool> {
        for (arg, _) in pred.entity_args() {
            if let Arg::Var(name) = arg {
                return Err(QueryError::UnboundArgument(name.clone()));
            }
        }
        for num in pred.num_args() {
            if let NumArg::Var(name) = num {
                return Err(QueryError::UnboundArgument(name.clone()));
            }
        }
        let mut state = State::default();
        self.eval_pred(pred, &mut state)
    }

    /// Returns true once enough solutions are collected; the caller stops
    /// unwinding.
    fn search(&self, state: State, agenda: &[&Goal], ctx: &mut Ctx) -> QueryResult<bool> {
        ctx.spend()?;
        let Some((goal, rest)) = agenda.split_first() else {
            return self.emit(state, ctx);
        };
        match goal {
            Goal::All(goals) => {
                let mut next: Vec<&Goal> = goals.iter().collect();
                next.extend_from_slice(rest);
                self.search(state, &next, ctx)
            }
            Goal::Any(goals) => {
                for (i, sub) in goals.iter().enumerate() {
                    trace!("disjunction branch {}/{}", i + 1, goals.len());
                    let mut next: Vec<&Goal> = vec![sub];
                    next.extend_from_slice(rest);
                    if self.search(state.clone(), &next, ctx)? {
                        return Ok(true);
                    }
                }
                trace!("disjunction exhausted, backtracking");
                Ok(false)
            }
            Goal::Pred(pred) => self.solve_pred(pred, state, rest, ctx),
        }
    }

    /// Enumerate the first unbound entity argument of a predicate, then
    /// evaluate it once everything is bound.
    fn solve_pred(
        &self,
        pred: &Pred,
        mut state: State,
        rest: &[&Goal],
        ctx: &mut Ctx,
    ) -> QueryResult<bool> {
        for (arg, pool) in pred.entity_args() {
            let Arg::Var(name) = arg else { continue };
            if state.entity(name).is_some() {
                continue;
            }
            let candidates: Vec<ObjectId> = match pool {
                Pool::Materials => self.eval().materials().collect(),
                Pool::Papers => self.eval().papers().to_vec(),
                Pool::Devices => self.eval().devices().to_vec(),
            };
            for candidate in candidates {
                trace!("trying {} = {}", name, candidate);
                let mut next = state.clone();
                next.bind(name, candidate);
                if self.solve_pred(pred, next, rest, ctx)? {
                    return Ok(true);
                }
            }
            return Ok(false);
        }
        if self.eval_pred(pred, &mut state)? {
            self.search(state, rest, ctx)
        } else {
            trace!("predicate failed, backtracking");
            Ok(false)
        }
    }

    fn resolve(&self, arg: &Arg, state: &State) -> QueryResult<ObjectId> {
        match arg {
            Arg::Obj(obj) => Ok(*obj),
            Arg::Var(name) => state
                .entity(name)
                .ok_or_else(|| QueryError::UnboundArgument(name.clone())),
        }
    }

    fn num(&self, arg: &NumArg, state: &mut State) -> VarId {
        match arg {
            NumArg::Const(value) => state.doms.constant(*value),
            NumArg::Var(name) => state.num_var(name, self.options.default_bounds),
        }
    }

    /// Constrain a numeric argument to a known value. A constant must
    /// match exactly; a variable is assigned, failing if its domain no
    /// longer admits the value.
    fn constrain(&self, arg: &NumArg, value: i64, state: &mut State) -> bool {
        match arg {
            NumArg::Const(c) => *c == value,
            NumArg::Var(name) => {
                let var = state.num_var(name, self.options.default_bounds);
                state.doms.assign(var, value).is_ok()
            }
        }
    }

    /// Evaluate one predicate with all entity arguments bound. `false`
    /// means the branch fails; evaluation errors propagate.
    fn eval_pred(&self, pred: &Pred, state: &mut State) -> QueryResult<bool> {
        let eval = self.eval();
        Ok(match pred {
            Pred::Paper(a) => eval.role(self.resolve(a, state)?) == Some(Role::Paper),
            Pred::Ink(a) => eval.role(self.resolve(a, state)?) == Some(Role::Ink),

            Pred::SamePlane(a, b) => {
                eval.same_plane(self.resolve(a, state)?, self.resolve(b, state)?)?
            }
            Pred::DifferentPlane(a, b) => {
                eval.different_plane(self.resolve(a, state)?, self.resolve(b, state)?)?
            }
            Pred::Over(a, b) => eval.over(self.resolve(a, state)?, self.resolve(b, state)?)?,
            Pred::Under(a, b) => eval.under(self.resolve(a, state)?, self.resolve(b, state)?)?,
            Pred::Intersect(a, b) => {
                eval.intersect(self.resolve(a, state)?, self.resolve(b, state)?)?
            }
            Pred::Inside(a, b) => eval.inside(self.resolve(a, state)?, self.resolve(b, state)?)?,
            Pred::Contains(a, b) => {
                eval.contains(self.resolve(a, state)?, self.resolve(b, state)?)
            }
            Pred::Seam(a, b) => eval.seam(self.resolve(a, state)?, self.resolve(b, state)?)?,
            Pred::Pauli(a, b) => {
                self.checker
                    .pauli(self.resolve(a, state)?, self.resolve(b, state)?)?
            }

            Pred::Visible(obj, dev) => {
                eval.visible(self.resolve(obj, state)?, self.resolve(dev, state)?)?
            }
            Pred::OnScreen(obj, dev) => {
                eval.on_screen(self.resolve(obj, state)?, self.resolve(dev, state)?)?
            }

            Pred::Position(a, x, y, z) => {
                let (px, py, pz) = eval.position(self.resolve(a, state)?)?;
                self.constrain(x, px, state)
                    && self.constrain(y, py, state)
                    && self.constrain(z, pz, state)
            }
            Pred::AbsolutePosition(a, x, y, z) => {
                let (px, py, pz) = eval.absolute_position(self.resolve(a, state)?)?;
                self.constrain(x, px, state)
                    && self.constrain(y, py, state)
                    && self.constrain(z, pz, state)
            }
            Pred::Size(a, w, h) => {
                let (sw, sh) = eval.size(self.resolve(a, state)?)?;
                self.constrain(w, sw, state) && self.constrain(h, sh, state)
            }
            Pred::Elevation(a, e) => {
                let elevation = eval.elevation(self.resolve(a, state)?)?;
                self.constrain(e, elevation, state)
            }

            Pred::Eq(a, b) => self.post_binary(Constraint::Eq, a, b, state),
            Pred::Ne(a, b) => self.post_binary(Constraint::Ne, a, b, state),
            Pred::Lt(a, b) => self.post_binary(Constraint::Lt, a, b, state),
            Pred::Le(a, b) => self.post_binary(Constraint::Le, a, b, state),
            Pred::Gt(a, b) => self.post_binary(Constraint::Gt, a, b, state),
            Pred::Ge(a, b) => self.post_binary(Constraint::Ge, a, b, state),
            Pred::Sum(a, b, c) => self.post_ternary(Constraint::Sum, a, b, c, state),
            Pred::Product(a, b, c) => self.post_ternary(Constraint::Product, a, b, c, state),
        })
    }

    fn post_binary(
        &self,
        make: fn(VarId, VarId) -> Constraint,
        a: &NumArg,
        b: &NumArg,
        state: &mut State,
    ) -> bool {
        let va = self.num(a, state);
        let vb = self.num(b, state);
        state.doms.post(make(va, vb)).is_ok()
    }

    fn post_ternary(
        &self,
        make: fn(VarId, VarId, VarId) -> Constraint,
        a: &NumArg,
        b: &NumArg,
        c: &NumArg,
        state: &mut State,
    ) -> bool {
        let va = self.num(a, state);
        let vb = self.num(b, state);
        let vc = self.num(c, state);
        state.doms.post(make(va, vb, vc)).is_ok()
    }

    /// Agenda satisfied: screen the bindings, fix remaining numeric
    /// variables, and record the solution.
    fn emit(&self, state: State, ctx: &mut Ctx) -> QueryResult<bool> {
        if self.options.enforce_exclusion {
            let material: Vec<ObjectId> = state
                .entities
                .iter()
                .map(|(_, obj)| *obj)
                .filter(|obj| self.eval().role(*obj).is_some())
                .collect();
            for (i, &a) in material.iter().enumerate() {
                for &b in &material[i + 1..] {
                    if !self.checker.pauli(a, b)? {
                        trace!("bindings violate mutual exclusion, backtracking");
                        return Ok(false);
                    }
                }
            }
        }
        self.label(state, ctx)
    }

    /// Assign remaining numeric variables in ascending value order so
    /// repeated queries emit identical solutions.
    fn label(&self, state: State, ctx: &mut Ctx) -> QueryResult<bool> {
        let unfixed = state
            .nums
            .iter()
            .map(|(_, var)| *var)
            .find(|var| !state.doms.is_fixed(*var));
        let Some(var) = unfixed else {
            let numbers = state
                .nums
                .iter()
                .map(|(name, var)| (name.clone(), state.doms.value(*var).unwrap_or_default()))
                .collect();
            ctx.solutions
                .push(Solution::new(state.entities.clone(), numbers));
            return Ok(ctx.solutions.len() >= ctx.target);
        };
        let bounds = state.doms.bounds(var);
        for value in bounds.min..=bounds.max {
            ctx.spend()?;
            let mut next = state.clone();
            if next.doms.assign(var, value).is_err() {
                continue;
            }
            if self.label(next, ctx)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
