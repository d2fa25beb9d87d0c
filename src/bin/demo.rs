use std::error::Error;

use hatdraw::{Experiment, Hat, Multiset, expand, run_experiment, tally};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("Expanding and tallying:\n--------------------");
    println!("expand(r=1, s=2) gives: {:?}", expand([("r", 1), ("s", 2)])?);

    let counts = tally(["r", "a", "m", "i", "a", "a", "a", "i"]);
    println!("tally([r, a, m, i, a, a, a, i]) gives: {}", counts);
    println!("Distinct labels: {:?}", counts.labels().collect::<Vec<_>>());
    println!("expand({}) gives: {:?}", counts, expand(counts.iter())?);
    println!("--------------------\n");

    println!("Hat representations:\n--------------------");
    let hat1: Hat = "yellow=3,blue=2,green=6".parse()?;
    let hat2 = Hat::try_from_pairs([("red", 5), ("orange", 4)])?;
    println!("hat1:  {}\nhat2:  {}", hat1, hat2);
    println!("--------------------\n");

    println!("Drawing:\n--------------------");
    let mut hat3: Hat = "red=5,orange=4,black=1,blue=0,pink=2,striped=9".parse()?;
    println!("hat3:  {}", hat3);
    println!("Drawing 5 random balls from hat3:  {:?}", hat3.draw(5));
    println!("hat3 after the draw:  {}", hat3);
    println!("--------------------\n");

    println!("Experiment:\n--------------------");
    let hat4: Hat = "black=6,red=4,green=3".parse()?;
    let expected: Multiset = "red=2,green=1".parse()?;
    let experiment = Experiment::new(&hat4, &expected, 5, 1)?;
    println!("One trial from {}: {}", hat4, if experiment.trial(&mut rand::rng()) { "success" } else { "failure" });

    let probability = run_experiment(&hat4, &expected, 5, 2_000)?;
    println!(
        "Approximate probability of at least {} when drawing 5 balls from {} over 2000 trials: {:.4}",
        expected, hat4, probability
    );
    println!("--------------------");

    Ok(())
}
