use decivec::{AngleUnit, Vector};

fn main() -> anyhow::Result<()> {
    println!("Decimal Vector Tour");
    println!("===================\n");

    let v = Vector::new(["3.009", "-6.172", "3.692"])?;
    let w = Vector::new(["6.404", "-9.144", "2.759"])?;
    println!("v = {v}");
    println!("w = {w}\n");

    println!("v x w              = {}", v.cross(&w)?);
    println!("parallelogram area = {}", v.area_of_parallelogram_with(&w)?);
    println!("triangle area      = {}", v.area_of_triangle_with(&w)?);
    println!(
        "angle              = {:.3} degrees\n",
        v.angle_with(&w, AngleUnit::Degrees)?
    );

    let v = Vector::new(["3.039", "1.879"])?;
    let basis = Vector::new(["0.825", "2.036"])?;
    println!("projection of {v} onto {basis}:");
    println!("  parallel   {}", v.component_parallel_to(&basis)?);
    println!("  orthogonal {}\n", v.component_orthogonal_to(&basis)?);

    let v = Vector::new(["-7.579", "-7.88"])?;
    let w = Vector::new(["22.737", "23.64"])?;
    println!("{v} parallel to {w}: {}", v.is_parallel_to(&w)?);
    println!("{v} orthogonal to {w}: {}", v.is_orthogonal_to(&w)?);

    let mismatched = Vector::new(["8.813", "-1.331", "-6.247"])?;
    if let Err(err) = v.dot(&mismatched) {
        println!("\ndot with {mismatched}: {err}");
    }

    Ok(())
}
