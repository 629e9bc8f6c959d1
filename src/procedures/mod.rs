/*!
Procedures for inference over a knowledge base.

- [Forward chaining](forward_chain), a data-driven fixpoint computation of all derivable facts.
- [Entailment](entailment), a recursive check of whether a query is covered by some store of facts.
- [SLD resolution](sld), a goal-driven stepwise search for a verdict on a list of goals.

The engines are synchronous and never mutate the knowledge base.
Each invocation owns its accumulator, and so a knowledge base may be shared between any number of concurrent invocations.
*/

pub mod entailment;
pub mod forward_chain;
pub mod sld;
