//! Example cars loaded at startup.

use crate::models::NewCar;

const EXAMPLE_CARS: [(&str, &str, &str, u64, u64); 10] = [
    ("Toyota Camry", "Sedan", "Reliable and comfortable family sedan", 2_500_000, 5),
    ("BMW X5", "SUV", "Powerful premium SUV", 6_800_000, 3),
    ("Tesla Model 3", "Electric", "Electric sedan with autopilot", 4_200_000, 7),
    ("Ford Mustang", "Sports car", "Legendary American muscle car", 3_900_000, 2),
    ("Volkswagen Golf", "Hatchback", "Popular city hatchback", 1_800_000, 10),
    ("Mercedes GLE", "SUV", "Full-size luxury SUV", 7_500_000, 4),
    ("Audi A4", "Sedan", "Sporty business sedan with quattro", 3_200_000, 6),
    ("Hyundai Tucson", "Crossover", "Stylish, well-equipped crossover", 2_100_000, 8),
    ("Porsche 911", "Sports car", "Iconic sports car", 12_000_000, 1),
    ("Lada Vesta", "Sedan", "Affordable Russian sedan", 900_000, 15),
];

pub fn example_cars() -> Vec<NewCar> {
    EXAMPLE_CARS
        .iter()
        .map(|&(name, category, description, price, stock)| NewCar {
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price,
            stock,
        })
        .collect()
}
