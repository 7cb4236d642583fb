//! Common source code fixtures for tests.

// Simple definitions
pub const SIMPLE_PART_DEF: &str = "part def Vehicle;";
pub const SIMPLE_PORT_DEF: &str = "port def DataPort;";
pub const SIMPLE_ITEM_DEF: &str = "item def Payload;";
pub const SIMPLE_ATTRIBUTE_DEF: &str = "attribute def Mass;";

// Nested structures
pub const NESTED_PACKAGE: &str = r#"
package Vehicles {
    part def Vehicle;
    part def Car;
}
"#;

pub const DEEPLY_NESTED_PACKAGES: &str = r#"
package Level1 {
    package Level2 {
        package Level3 {
            part def DeepPart;
        }
    }
}
"#;

pub const PART_WITH_USAGES: &str = r#"
part def Vehicle {
    part engine : Engine;
    part wheels : Wheel [4];
    attribute mass : Real = 1500;
}
part def Engine;
part def Wheel;
"#;

// Specialization
pub const SPECIALIZES_SCENARIO: &str = "package P1 { part A; part B specializes A; }";

pub const SPECIALIZATION_CHAIN: &str = r#"
part def Thing;
part def Vehicle :> Thing;
part def Car :> Vehicle;
part def SportsCar :> Car;
"#;

pub const DANGLING_SPECIALIZATION: &str = "part C specializes Ghost;";

pub const SUBSETS: &str = r#"
part def Wheel;
part def Car {
    part wheels : Wheel [4];
    part frontWheels : Wheel [2] :> Wheel subsets wheels;
}
"#;

pub const REDEFINITION: &str = r#"
part def Vehicle {
    attribute mass : Real;
}
part def Car :> Vehicle {
    attribute redefines mass = 1200;
}
"#;

pub const DUPLICATE_SIBLINGS: &str = "package P { part A; part A; }";

// Connections and messages
pub const CONNECT_SCENARIO: &str = "connect a.p1 to b.p2;";

pub const CONNECTION_BLOCK: &str = r#"
part def Assembly {
    part a : Pump;
    part b : Tank;
    connection feed {
        end part source : Pump;
        end target : Tank;
        connect a.outlet to b.inlet;
    }
}
"#;

pub const MESSAGE: &str = r#"
package Interaction {
    message sendSignal of Signal from sender.out to receiver;
}
"#;

// Annotations
pub const UNNAMED_COMMENT: &str = "package P { comment /* Top level note. */ }";

pub const NAMED_DOC: &str = "part def Engine { doc Purpose /* Converts fuel to torque. */ }";

pub const COMMENT_ABOUT: &str = "part def Engine; comment Note about Engine /* Heavy. */";

// Use cases
pub const ACTOR: &str = r#"
part def Person;
use case def Drive {
    actor driver : Person;
}
"#;

pub const USE_CASE: &str = r#"
use case def Travel {
    subject vehicle : Vehicle;
    objective { doc /* Arrive safely. */ }
    include use case Drive;
}
"#;

// Enumerations
pub const ENUMERATION: &str = r#"
enum def Color {
    enum red;
    green;
    blue = 3;
}
"#;

// References
pub const REFERENCE: &str = r#"
item def Fuel;
part def Tank {
    ref item contents : Fuel;
}
"#;

// Imports
pub const IMPORT: &str = r#"
package Vehicles;
package Garage {
    import Vehicles::*;
}
"#;

// Quoting
pub const QUOTED_NAMES: &str = r#"
part def 'Front Wheel';
attribute label : String = "spare";
"#;
